use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{error, warn};

use common::types::DataResponse;
use service::errors::ServiceError;
use service::prompt::service::{GetSystemAddressGenerationPromptInput, GetSystemPromptInput};

use crate::errors::JsonApiError;
use crate::routes::addresses::LanguageQuery;
use crate::state::ServerState;
use crate::validation;

fn prompt_error(kind: &str, e: ServiceError) -> JsonApiError {
    if e.is_not_found() {
        warn!(prompt = kind, error = %e, "prompt not found");
        return JsonApiError::not_found("Prompt not found");
    }
    error!(prompt = kind, error = %e, "failed to get prompt");
    JsonApiError::internal("Failed to fetch prompt")
}

#[utoipa::path(
    get, path = "/admin/prompt/system", tag = "prompts",
    params(LanguageQuery),
    responses(
        (status = 200, description = "Prompt text under `data`"),
        (status = 400, description = "Missing or invalid language"),
        (status = 401, description = "Missing or malformed credential"),
        (status = 404, description = "No prompt for this language"),
        (status = 500, description = "Retrieval failure")
    ),
    security(("bearer" = []))
)]
pub async fn get_system_prompt(
    State(state): State<ServerState>,
    Query(q): Query<LanguageQuery>,
) -> Result<Json<DataResponse<String>>, JsonApiError> {
    let language = validation::require_language(q.language.as_deref())?;
    let output = state
        .prompts
        .get_system_prompt(GetSystemPromptInput { language })
        .await
        .map_err(|e| prompt_error("system", e))?;
    Ok(Json(DataResponse { data: output.prompt }))
}

#[utoipa::path(
    get, path = "/admin/prompt/system/address", tag = "prompts",
    params(LanguageQuery),
    responses(
        (status = 200, description = "Prompt text under `data`"),
        (status = 400, description = "Missing or invalid language"),
        (status = 401, description = "Missing or malformed credential"),
        (status = 404, description = "No prompt for this language"),
        (status = 500, description = "Retrieval failure")
    ),
    security(("bearer" = []))
)]
pub async fn get_system_address_generation_prompt(
    State(state): State<ServerState>,
    Query(q): Query<LanguageQuery>,
) -> Result<Json<DataResponse<String>>, JsonApiError> {
    let language = validation::require_language(q.language.as_deref())?;
    let output = state
        .prompts
        .get_system_address_generation_prompt(GetSystemAddressGenerationPromptInput { language })
        .await
        .map_err(|e| prompt_error("address_generation", e))?;
    Ok(Json(DataResponse { data: output.prompt }))
}
