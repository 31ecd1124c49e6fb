use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

/// Access to the `stock_init` table
pub struct StockInitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StockInitRepository<'a, C> {
    /// Creates a new instance of [`StockInitRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sets the initial quantity for a (style, size) pair
    ///
    /// Inserts a new row or, when the pair already exists, overwrites its quantity.
    /// The previous quantity is replaced, never added to.
    pub async fn upsert(
        &self,
        style_name: String,
        size_name: String,
        quantity: i32,
    ) -> Result<entity::stock_init::Model, DbErr> {
        let stock = entity::stock_init::ActiveModel {
            style_name: ActiveValue::Set(style_name),
            size_name: ActiveValue::Set(size_name),
            quantity: ActiveValue::Set(quantity),
            ..Default::default()
        };

        entity::prelude::StockInit::insert(stock)
            .on_conflict(
                OnConflict::columns([
                    entity::stock_init::Column::StyleName,
                    entity::stock_init::Column::SizeName,
                ])
                .update_column(entity::stock_init::Column::Quantity)
                .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Gets every tracked (style, size) pair
    pub async fn get_all(&self) -> Result<Vec<entity::stock_init::Model>, DbErr> {
        entity::prelude::StockInit::find().all(self.db).await
    }

    /// Gets the row for a single (style, size) pair
    pub async fn get(
        &self,
        style_name: &str,
        size_name: &str,
    ) -> Result<Option<entity::stock_init::Model>, DbErr> {
        entity::prelude::StockInit::find()
            .filter(entity::stock_init::Column::StyleName.eq(style_name))
            .filter(entity::stock_init::Column::SizeName.eq(size_name))
            .one(self.db)
            .await
    }
}
