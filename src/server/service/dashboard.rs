//! Remaining stock computation.
//!
//! Remaining stock is never stored. It is derived on every request by joining the
//! initial quantities with the summed usage ledger and subtracting.

use std::collections::{BTreeMap, HashMap};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::stock::{ClothingStockDto, DashboardDto, OtherItemStockDto, StockCellDto},
    server::{
        data::{
            other_item::OtherItemRepository,
            reference::{SizeRepository, StyleRepository},
            stock::StockInitRepository,
            usage::UsageLogRepository,
        },
        error::Error,
        model::db::{OtherItemModel, StockInitModel},
    },
};

/// Builds the style -> size -> stock matrix
///
/// Only pairs with an initial quantity appear. Usage recorded against any other pair is
/// ignored. Usage rows with a missing style or size never match a tracked pair.
pub fn build_clothing_matrix(
    stock: Vec<StockInitModel>,
    usage: Vec<(Option<String>, Option<String>, i64)>,
) -> BTreeMap<String, BTreeMap<String, StockCellDto>> {
    let used: HashMap<(String, String), i64> = usage
        .into_iter()
        .filter_map(|(style, size, total)| Some(((style?, size?), total)))
        .collect();

    let mut matrix: BTreeMap<String, BTreeMap<String, StockCellDto>> = BTreeMap::new();
    for row in stock {
        let key = (row.style_name, row.size_name);
        let total_used = used.get(&key).copied().unwrap_or(0);
        let (style, size) = key;

        matrix
            .entry(style)
            .or_default()
            .insert(size, StockCellDto::new(row.quantity as i64, total_used));
    }

    matrix
}

/// Builds the stock list for other-items, in the order the items are given
///
/// Usage recorded against names without an item row is ignored.
pub fn build_other_item_stock(
    items: Vec<OtherItemModel>,
    usage: Vec<(Option<String>, i64)>,
) -> Vec<OtherItemStockDto> {
    let used: HashMap<String, i64> = usage
        .into_iter()
        .filter_map(|(name, total)| Some((name?, total)))
        .collect();

    items
        .into_iter()
        .map(|item| {
            let cell = StockCellDto::new(
                item.initial_quantity as i64,
                used.get(&item.name).copied().unwrap_or(0),
            );

            OtherItemStockDto {
                id: item.id,
                name: item.name,
                init: cell.init,
                used: cell.used,
                remain: cell.remain,
            }
        })
        .collect()
}

/// Builds the remaining stock report
pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    /// Creates a new instance of [`DashboardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes remaining stock for every tracked pair and every other-item
    ///
    /// All reads run in one transaction so the figures come from a single snapshot.
    pub async fn get_dashboard(&self) -> Result<DashboardDto, Error> {
        let txn = self.db.begin().await?;

        let stock = StockInitRepository::new(&txn).get_all().await?;
        let usage_repo = UsageLogRepository::new(&txn);
        let clothing_usage = usage_repo.sum_clothing_usage().await?;
        let other_usage = usage_repo.sum_other_usage().await?;
        let items = OtherItemRepository::new(&txn).get_all().await?;
        let styles = StyleRepository::new(&txn).get_names().await?;
        let sizes = SizeRepository::new(&txn).get_names().await?;

        txn.commit().await?;

        Ok(DashboardDto {
            clothing: ClothingStockDto {
                matrix: build_clothing_matrix(stock, clothing_usage),
                styles,
                sizes,
            },
            other_items: build_other_item_stock(items, other_usage),
        })
    }
}
