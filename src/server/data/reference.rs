use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect};

/// Read access to the preset clothing styles
pub struct StyleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StyleRepository<'a, C> {
    /// Creates a new instance of [`StyleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all styles ordered by sort order
    pub async fn get_all(&self) -> Result<Vec<entity::style::Model>, DbErr> {
        entity::prelude::Style::find()
            .order_by_asc(entity::style::Column::SortOrder)
            .all(self.db)
            .await
    }

    /// Gets only the style names, ordered by sort order
    pub async fn get_names(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Style::find()
            .select_only()
            .column(entity::style::Column::Name)
            .order_by_asc(entity::style::Column::SortOrder)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}

/// Read access to the preset clothing sizes
pub struct SizeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SizeRepository<'a, C> {
    /// Creates a new instance of [`SizeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all sizes ordered by sort order
    pub async fn get_all(&self) -> Result<Vec<entity::size::Model>, DbErr> {
        entity::prelude::Size::find()
            .order_by_asc(entity::size::Column::SortOrder)
            .all(self.db)
            .await
    }

    /// Gets only the size names, ordered by sort order
    pub async fn get_names(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Size::find()
            .select_only()
            .column(entity::size::Column::Name)
            .order_by_asc(entity::size::Column::SortOrder)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
