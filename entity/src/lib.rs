//! SeaORM entities for the stock room database.

pub mod prelude;

pub mod other_item;
pub mod size;
pub mod stock_init;
pub mod style;
pub mod usage_log;
