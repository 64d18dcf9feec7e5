use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};

use common::types::DataResponse;
use service::address::service::{GetAddressByIdInput, GetAddressesInput};

use crate::dto::{to_address_dtos, AddressDto};
use crate::errors::JsonApiError;
use crate::state::ServerState;
use crate::validation;

#[derive(Debug, Deserialize, ToSchema)]
pub struct GetAddressesRequest {
    pub language: String,
    pub tags: Option<Vec<String>>,
    /// Capped at 100; zero, negative or larger values mean 100.
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetAddressesResponse {
    pub data: Vec<AddressDto>,
    pub count: usize,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

#[utoipa::path(
    post, path = "/api/v1/admin/addresses", tag = "addresses",
    request_body = GetAddressesRequest,
    responses(
        (status = 200, description = "Addresses", body = GetAddressesResponse),
        (status = 400, description = "Invalid body or language"),
        (status = 401, description = "Missing or malformed credential"),
        (status = 500, description = "Retrieval failure")
    ),
    security(("bearer" = []))
)]
pub async fn get_addresses(
    State(state): State<ServerState>,
    payload: Result<Json<GetAddressesRequest>, JsonRejection>,
) -> Result<Json<GetAddressesResponse>, JsonApiError> {
    let req = validation::bind_json(payload)?;
    let language = validation::validate_language(&req.language)?;
    let input = GetAddressesInput {
        language,
        tags: req.tags.unwrap_or_default(),
        limit: req.limit.unwrap_or_default(),
    };
    let output = state.addresses.get_addresses(input).await.map_err(|e| {
        error!(error = %e, "failed to get addresses");
        JsonApiError::internal("Failed to fetch address")
    })?;
    info!(count = output.count, %language, "list addresses");
    Ok(Json(GetAddressesResponse {
        data: to_address_dtos(output.addresses),
        count: output.count,
    }))
}

#[utoipa::path(
    get, path = "/api/v1/admin/addresses/{id}", tag = "addresses",
    params(("id" = String, Path, description = "Address ID"), LanguageQuery),
    responses(
        (status = 200, description = "Address", body = AddressDto),
        (status = 400, description = "Missing id or language, or invalid language"),
        (status = 401, description = "Missing or malformed credential"),
        (status = 404, description = "No address with this id and language"),
        (status = 500, description = "Retrieval failure")
    ),
    security(("bearer" = []))
)]
pub async fn get_address_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(q): Query<LanguageQuery>,
) -> Result<Json<DataResponse<AddressDto>>, JsonApiError> {
    let id = validation::require_address_id(&id)?.to_string();
    let language = validation::require_language(q.language.as_deref())?;
    let input = GetAddressByIdInput { language, id };
    let address_id = input.id.clone();

    match state.addresses.get_address_by_id(input).await {
        Ok(output) => Ok(Json(DataResponse { data: AddressDto::from(output.address) })),
        Err(e) if e.is_not_found() => {
            warn!(address_id = %address_id, %language, "address not found");
            Err(JsonApiError::not_found("Address not found"))
        }
        Err(e) => {
            error!(address_id = %address_id, error = %e, "failed to get address");
            Err(JsonApiError::internal("Failed to fetch address"))
        }
    }
}
