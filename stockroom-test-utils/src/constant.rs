//! Constants shared across tests.

/// Preset styles and sizes inserted by the seed migration, as `(name, sort_order)`.
pub use migration::{PRESET_SIZES, PRESET_STYLES};

/// `usage_logs.item_type` value for clothing entries.
pub static ITEM_TYPE_CLOTHING: &str = "clothing";

/// `usage_logs.item_type` value for other-item entries.
pub static ITEM_TYPE_OTHER: &str = "other";

/// User name used by fixtures when a test doesn't care who took the item.
pub static TEST_USER_NAME: &str = "test_user";
