pub use sea_orm_migration::prelude::*;

mod m20251101_000001_style;
mod m20251101_000002_size;
mod m20251101_000003_stock_init;
mod m20251101_000004_usage_log;
mod m20251101_000005_other_item;
mod m20251101_000006_seed_style_size;

pub use m20251101_000006_seed_style_size::{PRESET_SIZES, PRESET_STYLES};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_style::Migration),
            Box::new(m20251101_000002_size::Migration),
            Box::new(m20251101_000003_stock_init::Migration),
            Box::new(m20251101_000004_usage_log::Migration),
            Box::new(m20251101_000005_other_item::Migration),
            Box::new(m20251101_000006_seed_style_size::Migration),
        ]
    }
}
