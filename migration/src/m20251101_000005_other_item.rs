use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OtherItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OtherItem::Id))
                    .col(string_uniq(OtherItem::Name))
                    .col(integer(OtherItem::InitialQuantity).default(0))
                    .col(timestamp(OtherItem::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OtherItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OtherItem {
    #[sea_orm(iden = "other_items")]
    Table,
    Id,
    Name,
    InitialQuantity,
    CreatedAt,
}
