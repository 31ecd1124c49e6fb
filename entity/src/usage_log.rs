use sea_orm::entity::prelude::*;

/// Append-only ledger row for one consumption event.
///
/// Items are referenced by name so the ledger keeps its meaning after an
/// other-item is deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usage_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_name: String,
    pub item_type: String,
    pub style_name: Option<String>,
    pub size_name: Option<String>,
    pub other_item_name: Option<String>,
    pub quantity: i32,
    pub remark: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
