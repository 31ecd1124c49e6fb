use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of item a usage entry consumes
#[derive(Serialize, Deserialize, ToSchema, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Clothing,
    Other,
}

impl ItemType {
    /// Value stored in the `usage_logs.item_type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clothing => "clothing",
            Self::Other => "other",
        }
    }
}

/// Body of `POST /api/usage/add`
#[derive(Serialize, Deserialize, ToSchema, Debug, Default, Clone)]
pub struct AddUsageRequest {
    /// Name of the person taking the item
    pub user: Option<String>,
    /// Defaults to `clothing`
    #[serde(rename = "itemType")]
    pub item_type: Option<ItemType>,
    pub style: Option<String>,
    pub size: Option<String>,
    #[serde(rename = "otherItemName")]
    pub other_item_name: Option<String>,
    /// Defaults to `1` when absent or `0`
    pub qty: Option<i32>,
    pub remark: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
pub struct UsageLogDto {
    pub id: i32,
    pub user_name: String,
    pub item_type: String,
    pub style_name: Option<String>,
    pub size_name: Option<String>,
    pub other_item_name: Option<String>,
    pub quantity: i32,
    pub remark: Option<String>,
    /// Local time formatted as `YYYY-MM-DD HH:MM:SS`
    pub created_at: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct UsageLogsDto {
    /// Newest entries first
    pub logs: Vec<UsageLogDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct AddUsageDto {
    /// Identifier assigned to the new ledger entry
    pub id: i32,
    pub message: String,
}
