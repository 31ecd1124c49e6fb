use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::model::usage::ItemType;

/// Fields of a ledger entry about to be recorded
///
/// Names are stored as given, without checking them against styles, sizes or other-items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUsageLog {
    /// Person who took the item
    pub user_name: String,
    /// Clothing or other item
    pub item_type: ItemType,
    /// Set for clothing entries
    pub style_name: Option<String>,
    /// Set for clothing entries
    pub size_name: Option<String>,
    /// Set for other-item entries
    pub other_item_name: Option<String>,
    /// Units taken
    pub quantity: i32,
    /// Optional free text
    pub remark: Option<String>,
}

/// Access to the append-only `usage_logs` table
pub struct UsageLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UsageLogRepository<'a, C> {
    /// Creates a new instance of [`UsageLogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends an entry to the ledger, stamped with the current UTC time
    pub async fn create(&self, usage: NewUsageLog) -> Result<entity::usage_log::Model, DbErr> {
        let usage = entity::usage_log::ActiveModel {
            user_name: ActiveValue::Set(usage.user_name),
            item_type: ActiveValue::Set(usage.item_type.as_str().to_string()),
            style_name: ActiveValue::Set(usage.style_name),
            size_name: ActiveValue::Set(usage.size_name),
            other_item_name: ActiveValue::Set(usage.other_item_name),
            quantity: ActiveValue::Set(usage.quantity),
            remark: ActiveValue::Set(usage.remark),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::UsageLog::insert(usage)
            .exec_with_returning(self.db)
            .await
    }

    /// Gets the whole ledger, newest entries first
    ///
    /// Entries sharing a timestamp are ordered by descending id so the most recently
    /// inserted one still comes first.
    pub async fn get_all_newest_first(&self) -> Result<Vec<entity::usage_log::Model>, DbErr> {
        entity::prelude::UsageLog::find()
            .order_by_desc(entity::usage_log::Column::CreatedAt)
            .order_by_desc(entity::usage_log::Column::Id)
            .all(self.db)
            .await
    }

    /// Sums clothing usage per (style, size) name pair
    ///
    /// Returns `(style_name, size_name, total_used)` for every pair with at least one entry.
    pub async fn sum_clothing_usage(
        &self,
    ) -> Result<Vec<(Option<String>, Option<String>, i64)>, DbErr> {
        entity::prelude::UsageLog::find()
            .select_only()
            .column(entity::usage_log::Column::StyleName)
            .column(entity::usage_log::Column::SizeName)
            .column_as(entity::usage_log::Column::Quantity.sum(), "total_used")
            .filter(entity::usage_log::Column::ItemType.eq(ItemType::Clothing.as_str()))
            .group_by(entity::usage_log::Column::StyleName)
            .group_by(entity::usage_log::Column::SizeName)
            .into_tuple::<(Option<String>, Option<String>, i64)>()
            .all(self.db)
            .await
    }

    /// Sums other-item usage per item name
    ///
    /// Returns `(other_item_name, total_used)`, including names whose item was deleted.
    pub async fn sum_other_usage(&self) -> Result<Vec<(Option<String>, i64)>, DbErr> {
        entity::prelude::UsageLog::find()
            .select_only()
            .column(entity::usage_log::Column::OtherItemName)
            .column_as(entity::usage_log::Column::Quantity.sum(), "total_used")
            .filter(entity::usage_log::Column::ItemType.eq(ItemType::Other.as_str()))
            .group_by(entity::usage_log::Column::OtherItemName)
            .into_tuple::<(Option<String>, i64)>()
            .all(self.db)
            .await
    }
}
