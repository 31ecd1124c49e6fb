use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A style or size label with its display position
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct ReferenceItemDto {
    pub name: String,
    pub sort_order: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct StylesDto {
    /// Styles ordered by `sort_order` ascending
    pub styles: Vec<ReferenceItemDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct SizesDto {
    /// Sizes ordered by `sort_order` ascending
    pub sizes: Vec<ReferenceItemDto>,
}
