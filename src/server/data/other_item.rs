use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

/// Access to the `other_items` table
pub struct OtherItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OtherItemRepository<'a, C> {
    /// Creates a new instance of [`OtherItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new other-item
    ///
    /// Fails with a unique constraint error when the name is already taken.
    pub async fn create(
        &self,
        name: String,
        initial_quantity: i32,
    ) -> Result<entity::other_item::Model, DbErr> {
        let item = entity::other_item::ActiveModel {
            name: ActiveValue::Set(name),
            initial_quantity: ActiveValue::Set(initial_quantity),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::OtherItem::insert(item)
            .exec_with_returning(self.db)
            .await
    }

    /// Gets all other-items ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::other_item::Model>, DbErr> {
        entity::prelude::OtherItem::find()
            .order_by_asc(entity::other_item::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets an other-item by its exact name
    pub async fn get_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::other_item::Model>, DbErr> {
        entity::prelude::OtherItem::find()
            .filter(entity::other_item::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Replaces the initial quantity of an other-item
    ///
    /// Returns the number of rows affected, 0 when no item has the given id.
    pub async fn update_initial_quantity(&self, id: i32, quantity: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OtherItem::update_many()
            .col_expr(
                entity::other_item::Column::InitialQuantity,
                Expr::value(quantity),
            )
            .filter(entity::other_item::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes an other-item, leaving its usage entries in the ledger
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::OtherItem::delete_by_id(id)
            .exec(self.db)
            .await
    }
}
