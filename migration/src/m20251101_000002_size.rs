use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Size::Table)
                    .if_not_exists()
                    .col(pk_auto(Size::Id))
                    .col(string_uniq(Size::Name))
                    .col(integer(Size::SortOrder).default(0))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Size::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Size {
    #[sea_orm(iden = "sizes")]
    Table,
    Id,
    Name,
    SortOrder,
}
