use sea_orm_migration::prelude::*;

use crate::{m20251101_000001_style::Style, m20251101_000002_size::Size};

/// Preset styles as `(name, sort_order)`.
pub static PRESET_STYLES: [(&str, i32); 4] = [("黑", 1), ("灰蓝", 2), ("深蓝", 3), ("白", 4)];

/// Preset sizes as `(name, sort_order)`.
pub static PRESET_SIZES: [(&str, i32); 5] = [("XS", 1), ("S", 2), ("M", 3), ("L", 4), ("XL", 5)];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let mut styles = Query::insert();
        styles
            .into_table(Style::Table)
            .columns([Style::Name, Style::SortOrder])
            .on_conflict(OnConflict::column(Style::Name).do_nothing().to_owned());
        for (name, sort_order) in PRESET_STYLES {
            styles
                .values([name.into(), sort_order.into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        db.execute(&styles).await?;

        let mut sizes = Query::insert();
        sizes
            .into_table(Size::Table)
            .columns([Size::Name, Size::SortOrder])
            .on_conflict(OnConflict::column(Size::Name).do_nothing().to_owned());
        for (name, sort_order) in PRESET_SIZES {
            sizes
                .values([name.into(), sort_order.into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        db.execute(&sizes).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let styles = Query::delete()
            .from_table(Style::Table)
            .and_where(Expr::col(Style::Name).is_in(PRESET_STYLES.map(|(name, _)| name)))
            .to_owned();
        db.execute(&styles).await?;

        let sizes = Query::delete()
            .from_table(Size::Table)
            .and_where(Expr::col(Size::Name).is_in(PRESET_SIZES.map(|(name, _)| name)))
            .to_owned();
        db.execute(&sizes).await?;

        Ok(())
    }
}
