use sea_orm::DatabaseConnection;

use crate::{
    model::reference::ReferenceItemDto,
    server::{
        data::reference::{SizeRepository, StyleRepository},
        error::Error,
    },
};

/// Read access to the preset styles and sizes
pub struct ReferenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceService<'a> {
    /// Creates a new instance of [`ReferenceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the preset styles ordered by sort order
    pub async fn get_styles(&self) -> Result<Vec<ReferenceItemDto>, Error> {
        let styles = StyleRepository::new(self.db).get_all().await?;

        Ok(styles
            .into_iter()
            .map(|s| ReferenceItemDto {
                name: s.name,
                sort_order: s.sort_order,
            })
            .collect())
    }

    /// Gets the preset sizes ordered by sort order
    pub async fn get_sizes(&self) -> Result<Vec<ReferenceItemDto>, Error> {
        let sizes = SizeRepository::new(self.db).get_all().await?;

        Ok(sizes
            .into_iter()
            .map(|s| ReferenceItemDto {
                name: s.name,
                sort_order: s.sort_order,
            })
            .collect())
    }
}
