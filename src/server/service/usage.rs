use sea_orm::DatabaseConnection;

use crate::{
    model::usage::{AddUsageRequest, ItemType, UsageLogDto},
    server::{
        data::{
            other_item::OtherItemRepository, stock::StockInitRepository,
            usage::{NewUsageLog, UsageLogRepository},
        },
        error::{validation::ValidationError, Error},
        model::db::UsageLogModel,
        util::{input::non_empty, time::format_local},
    },
};

/// Applies defaults to a usage request, then checks the fields its item type requires
///
/// Defaults: item type `clothing`, quantity `1` when absent or `0`, and empty strings
/// become absent values. Names belonging to the other item type are dropped.
pub fn validate_usage(request: AddUsageRequest) -> Result<NewUsageLog, ValidationError> {
    let user_name = non_empty(request.user).ok_or(ValidationError::MissingUserName)?;
    let item_type = request.item_type.unwrap_or_default();
    let quantity = match request.qty {
        None | Some(0) => 1,
        Some(qty) => qty,
    };

    let (style_name, size_name, other_item_name) = match item_type {
        ItemType::Clothing => match (non_empty(request.style), non_empty(request.size)) {
            (Some(style), Some(size)) => (Some(style), Some(size), None),
            _ => return Err(ValidationError::MissingClothingFields),
        },
        ItemType::Other => {
            let name =
                non_empty(request.other_item_name).ok_or(ValidationError::MissingOtherItemName)?;
            (None, None, Some(name))
        }
    };

    Ok(NewUsageLog {
        user_name,
        item_type,
        style_name,
        size_name,
        other_item_name,
        quantity,
        remark: non_empty(request.remark),
    })
}

fn to_dto(log: UsageLogModel) -> UsageLogDto {
    UsageLogDto {
        id: log.id,
        user_name: log.user_name,
        item_type: log.item_type,
        style_name: log.style_name,
        size_name: log.size_name,
        other_item_name: log.other_item_name,
        quantity: log.quantity,
        remark: log.remark,
        created_at: format_local(log.created_at),
    }
}

/// Records usage and lists the ledger
pub struct UsageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsageService<'a> {
    /// Creates a new instance of [`UsageService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record a usage entry in the ledger
    ///
    /// Entries against a (style, size) pair without an initial quantity, or against an
    /// other-item name that does not exist, are still recorded. They do not show up on
    /// the dashboard, so a warning is logged for them.
    ///
    /// # Arguments
    /// - `request` (`AddUsageRequest`): The raw request body
    ///
    /// # Returns
    /// Returns a Result containing:
    /// - `i32`: The ID of the new ledger entry
    /// - [`Error`]: A validation error for missing fields, or a database error
    pub async fn add_usage(&self, request: AddUsageRequest) -> Result<i32, Error> {
        let usage = validate_usage(request)?;

        self.warn_if_untracked(&usage).await?;

        let created = UsageLogRepository::new(self.db).create(usage).await?;

        Ok(created.id)
    }

    /// Gets the whole ledger, newest entries first
    pub async fn get_logs(&self) -> Result<Vec<UsageLogDto>, Error> {
        let logs = UsageLogRepository::new(self.db)
            .get_all_newest_first()
            .await?;

        Ok(logs.into_iter().map(to_dto).collect())
    }

    async fn warn_if_untracked(&self, usage: &NewUsageLog) -> Result<(), Error> {
        match (
            usage.style_name.as_deref(),
            usage.size_name.as_deref(),
            usage.other_item_name.as_deref(),
        ) {
            (Some(style), Some(size), _) => {
                let stock = StockInitRepository::new(self.db).get(style, size).await?;
                if stock.is_none() {
                    tracing::warn!(
                        "Usage by {} against untracked pair {}/{} is hidden from the dashboard",
                        usage.user_name,
                        style,
                        size
                    );
                }
            }
            (_, _, Some(name)) => {
                let item = OtherItemRepository::new(self.db).get_by_name(name).await?;
                if item.is_none() {
                    tracing::warn!(
                        "Usage by {} against unknown other item {} is hidden from the dashboard",
                        usage.user_name,
                        name
                    );
                }
            }
            _ => {}
        }

        Ok(())
    }
}
