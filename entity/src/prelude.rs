pub use super::other_item::Entity as OtherItem;
pub use super::size::Entity as Size;
pub use super::stock_init::Entity as StockInit;
pub use super::style::Entity as Style;
pub use super::usage_log::Entity as UsageLog;
