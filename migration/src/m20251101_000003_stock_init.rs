use sea_orm_migration::{prelude::*, schema::*};

static IDX_STOCK_INIT_STYLE_SIZE: &str = "idx-stock_init-style_name-size_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StockInit::Table)
                    .if_not_exists()
                    .col(pk_auto(StockInit::Id))
                    .col(string(StockInit::StyleName))
                    .col(string(StockInit::SizeName))
                    .col(integer(StockInit::Quantity).default(0))
                    .to_owned(),
            )
            .await?;

        // Upserts conflict on this index
        manager
            .create_index(
                Index::create()
                    .name(IDX_STOCK_INIT_STYLE_SIZE)
                    .table(StockInit::Table)
                    .col(StockInit::StyleName)
                    .col(StockInit::SizeName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STOCK_INIT_STYLE_SIZE)
                    .table(StockInit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StockInit::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StockInit {
    Table,
    Id,
    StyleName,
    SizeName,
    Quantity,
}
