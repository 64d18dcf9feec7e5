use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod addresses;
pub mod auth;
pub mod prompts;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router: public health and docs, plus the admin
/// routes behind the bearer gate.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let admin = Router::new()
        .route("/api/v1/admin/addresses", post(addresses::get_addresses))
        .route("/api/v1/admin/addresses/:id", get(addresses::get_address_by_id))
        .route("/admin/prompt/system", get(prompts::get_system_prompt))
        .route(
            "/admin/prompt/system/address",
            get(prompts::get_system_address_generation_prompt),
        )
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            auth::require_admin_token,
        ))
        .with_state(state);

    public
        .merge(admin)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
