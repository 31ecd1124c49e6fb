use sea_orm::DatabaseConnection;

use crate::{
    model::other_item::{CreateOtherItemRequest, OtherItemDto, UpdateOtherItemRequest},
    server::{
        data::other_item::OtherItemRepository,
        error::{validation::ValidationError, Error},
        model::db::OtherItemModel,
        util::input::non_empty,
    },
};

/// Creates, lists, updates and deletes other-items
pub struct OtherItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OtherItemService<'a> {
    /// Creates a new instance of [`OtherItemService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an other-item, with an initial quantity of 0 when none is given
    ///
    /// A duplicate name is a database constraint error.
    pub async fn create(&self, request: CreateOtherItemRequest) -> Result<OtherItemModel, Error> {
        let name = non_empty(request.name).ok_or(ValidationError::MissingItemName)?;
        let quantity = request.quantity.unwrap_or(0);

        let item = OtherItemRepository::new(self.db)
            .create(name, quantity)
            .await?;

        tracing::debug!("Created other item {} ({})", item.name, item.id);

        Ok(item)
    }

    /// Lists every other-item alphabetically
    pub async fn get_all(&self) -> Result<Vec<OtherItemDto>, Error> {
        let items = OtherItemRepository::new(self.db).get_all().await?;

        Ok(items
            .into_iter()
            .map(|i| OtherItemDto {
                id: i.id,
                name: i.name,
                initial_quantity: i.initial_quantity,
            })
            .collect())
    }

    /// Replaces the initial quantity of an item
    ///
    /// An unknown id is not an error.
    pub async fn update_quantity(
        &self,
        id: i32,
        request: UpdateOtherItemRequest,
    ) -> Result<(), Error> {
        let quantity = request.quantity.ok_or(ValidationError::MissingQuantity)?;

        let affected = OtherItemRepository::new(self.db)
            .update_initial_quantity(id, quantity)
            .await?;
        if affected == 0 {
            tracing::debug!("Update of other item {} matched no rows", id);
        }

        Ok(())
    }

    /// Deletes an item; usage entries that name it stay in the ledger
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let result = OtherItemRepository::new(self.db).delete(id).await?;
        if result.rows_affected == 0 {
            tracing::debug!("Delete of other item {} matched no rows", id);
        }

        Ok(())
    }
}
