//! Request validation, in two stages: structural decode of the body against
//! its schema, then semantic checks on the decoded values.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use tracing::warn;

use models::Language;

use crate::errors::JsonApiError;

/// Stage one: turn a JSON extraction result into the payload or a 400.
pub fn bind_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, JsonApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let detail = rejection.body_text();
            warn!(error = %detail, "failed to bind request body");
            Err(JsonApiError::bad_request(format!("Invalid request body: {detail}")))
        }
    }
}

/// Stage two: the language must be one of the supported codes.
pub fn validate_language(code: &str) -> Result<Language, JsonApiError> {
    let invalid = || {
        warn!(language = %code, "unsupported language");
        JsonApiError::bad_request("Invalid language")
    };
    if !Language::is_supported(code) {
        return Err(invalid());
    }
    code.parse::<Language>().map_err(|_| invalid())
}

/// Like [`validate_language`], for optional query parameters.
pub fn require_language(code: Option<&str>) -> Result<Language, JsonApiError> {
    match code {
        Some(code) if !code.is_empty() => validate_language(code),
        _ => {
            warn!("missing language parameter");
            Err(JsonApiError::bad_request("Language is required"))
        }
    }
}

pub fn require_address_id(id: &str) -> Result<&str, JsonApiError> {
    if id.trim().is_empty() {
        warn!("missing address id parameter");
        return Err(JsonApiError::bad_request("Address ID is required"));
    }
    Ok(id)
}
