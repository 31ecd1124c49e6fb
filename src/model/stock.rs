use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /api/stock/init`
///
/// All fields are optional at the type level so that absent fields are reported
/// through the API's own validation error rather than a deserialization failure.
#[derive(Serialize, Deserialize, ToSchema, Debug, Default, Clone)]
pub struct StockInitRequest {
    pub style: Option<String>,
    pub size: Option<String>,
    /// Initial quantity, `0` is a valid value
    pub qty: Option<i32>,
}

/// Initial quantities keyed by style then size, plus the ordered labels
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct StockInitMatrixDto {
    pub matrix: BTreeMap<String, BTreeMap<String, i32>>,
    pub styles: Vec<String>,
    pub sizes: Vec<String>,
}

/// Stock figures for a single tracked item
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockCellDto {
    pub init: i64,
    pub used: i64,
    /// `init - used`, negative when usage exceeds the initial count
    pub remain: i64,
}

impl StockCellDto {
    pub fn new(init: i64, used: i64) -> Self {
        Self {
            init,
            used,
            remain: init - used,
        }
    }
}

/// Remaining clothing stock keyed by style then size
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ClothingStockDto {
    pub matrix: BTreeMap<String, BTreeMap<String, StockCellDto>>,
    /// All style names by sort order, independent of which pairs are tracked
    pub styles: Vec<String>,
    /// All size names by sort order, independent of which pairs are tracked
    pub sizes: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct OtherItemStockDto {
    pub id: i32,
    pub name: String,
    pub init: i64,
    pub used: i64,
    pub remain: i64,
}

/// Body of `GET /api/stock/dashboard`
#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct DashboardDto {
    pub clothing: ClothingStockDto,
    #[serde(rename = "otherItems")]
    pub other_items: Vec<OtherItemStockDto>,
}
