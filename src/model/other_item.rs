use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct OtherItemDto {
    pub id: i32,
    pub name: String,
    pub initial_quantity: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct OtherItemsDto {
    /// Items ordered alphabetically by name
    pub items: Vec<OtherItemDto>,
}

/// Body of `POST /api/other-items`
#[derive(Serialize, Deserialize, ToSchema, Debug, Default, Clone)]
pub struct CreateOtherItemRequest {
    pub name: Option<String>,
    /// Defaults to `0`
    pub quantity: Option<i32>,
}

/// Body of `PUT /api/other-items/{id}`
#[derive(Serialize, Deserialize, ToSchema, Debug, Default, Clone)]
pub struct UpdateOtherItemRequest {
    pub quantity: Option<i32>,
}
