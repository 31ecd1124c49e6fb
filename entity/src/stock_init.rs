use sea_orm::entity::prelude::*;

/// Initial quantity recorded for one (style, size) pair.
///
/// `style_name` and `size_name` together are unique; the migration creates the
/// composite unique index the upsert conflicts on.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stock_init")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub style_name: String,
    pub size_name: String,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
