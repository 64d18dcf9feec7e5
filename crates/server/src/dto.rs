use serde::Serialize;
use utoipa::ToSchema;

use models::address;

/// Wire shape of an address.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub id: String,
    pub language: String,
    pub name: String,
    pub street: String,
    pub city: String,
    pub region: Option<String>,
    pub postal_code: String,
    pub country: String,
    pub tags: Vec<String>,
    /// RFC 3339
    pub created_at: String,
}

impl From<address::Model> for AddressDto {
    fn from(m: address::Model) -> Self {
        Self {
            id: m.id,
            language: m.language.as_str().to_string(),
            name: m.name,
            street: m.street,
            city: m.city,
            region: m.region,
            postal_code: m.postal_code,
            country: m.country,
            tags: m.tags,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}

pub fn to_address_dtos(items: Vec<address::Model>) -> Vec<AddressDto> {
    items.into_iter().map(AddressDto::from).collect()
}
