//! Database model type aliases.
//!
//! Short names for the SeaORM entity models so service signatures don't need to spell
//! out the `entity` crate paths.

/// Initial quantity for one (style, size) pair.
///
/// # Fields (from `entity::stock_init::Model`)
/// - `id` - Primary key
/// - `style_name` - Style the quantity applies to
/// - `size_name` - Size the quantity applies to
/// - `quantity` - Initial count, overwritten on every upsert
pub type StockInitModel = entity::stock_init::Model;

/// Append-only usage ledger entry.
///
/// # Fields (from `entity::usage_log::Model`)
/// - `id` - Primary key, returned to the client on insert
/// - `user_name` - Person who took the item
/// - `item_type` - `clothing` or `other`
/// - `style_name` / `size_name` - Set for clothing entries
/// - `other_item_name` - Set for other-item entries
/// - `quantity` - Units consumed
/// - `remark` - Optional free text
/// - `created_at` - UTC insertion timestamp
pub type UsageLogModel = entity::usage_log::Model;

/// Miscellaneous stock item with its initial quantity.
pub type OtherItemModel = entity::other_item::Model;
