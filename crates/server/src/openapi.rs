use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

use crate::dto::AddressDto;
use crate::routes::addresses::{GetAddressesRequest, GetAddressesResponse};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::addresses::get_addresses,
        crate::routes::addresses::get_address_by_id,
        crate::routes::prompts::get_system_prompt,
        crate::routes::prompts::get_system_address_generation_prompt,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            AddressDto,
            GetAddressesRequest,
            GetAddressesResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health"),
        (name = "addresses"),
        (name = "prompts")
    )
)]
pub struct ApiDoc;
