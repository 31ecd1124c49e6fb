use sea_orm_migration::{prelude::*, schema::*};

static IDX_USAGE_LOG_CREATED_AT: &str = "idx-usage_logs-created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UsageLog::Table)
                    .if_not_exists()
                    .col(pk_auto(UsageLog::Id))
                    .col(string(UsageLog::UserName))
                    .col(string(UsageLog::ItemType).default("clothing"))
                    .col(string_null(UsageLog::StyleName))
                    .col(string_null(UsageLog::SizeName))
                    .col(string_null(UsageLog::OtherItemName))
                    .col(integer(UsageLog::Quantity).default(1))
                    .col(text_null(UsageLog::Remark))
                    .col(timestamp(UsageLog::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USAGE_LOG_CREATED_AT)
                    .table(UsageLog::Table)
                    .col(UsageLog::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USAGE_LOG_CREATED_AT)
                    .table(UsageLog::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UsageLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UsageLog {
    #[sea_orm(iden = "usage_logs")]
    Table,
    Id,
    UserName,
    ItemType,
    StyleName,
    SizeName,
    OtherItemName,
    Quantity,
    Remark,
    CreatedAt,
}
