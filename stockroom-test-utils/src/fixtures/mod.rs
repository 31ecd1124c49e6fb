//! Fixture helpers for inserting test data directly through the entities.
//!
//! - `stock` - initial (style, size) quantities
//! - `other_item` - miscellaneous items
//! - `usage` - usage ledger entries

pub mod other_item;
pub mod stock;
pub mod usage;
