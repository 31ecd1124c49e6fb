use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::stock::{StockInitMatrixDto, StockInitRequest},
    server::{
        data::{
            reference::{SizeRepository, StyleRepository},
            stock::StockInitRepository,
        },
        error::{validation::ValidationError, Error},
        model::db::StockInitModel,
        util::input::non_empty,
    },
};

/// A validated stock initialization
#[derive(Debug, PartialEq, Eq)]
pub struct StockInit {
    /// Style name, never empty
    pub style: String,
    /// Size name, never empty
    pub size: String,
    /// Initial quantity, may be zero
    pub quantity: i32,
}

/// Checks that style, size and quantity are all present
///
/// Empty names count as missing. A quantity of `0` is valid.
pub fn validate_stock_init(request: StockInitRequest) -> Result<StockInit, ValidationError> {
    match (non_empty(request.style), non_empty(request.size), request.qty) {
        (Some(style), Some(size), Some(quantity)) => Ok(StockInit {
            style,
            size,
            quantity,
        }),
        _ => Err(ValidationError::MissingStockFields),
    }
}

/// Reads and sets initial clothing stock
pub struct StockService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StockService<'a> {
    /// Creates a new instance of [`StockService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets initial quantities keyed by style then size, with the ordered style and size names
    pub async fn get_init_matrix(&self) -> Result<StockInitMatrixDto, Error> {
        let stock = StockInitRepository::new(self.db).get_all().await?;
        let styles = StyleRepository::new(self.db).get_names().await?;
        let sizes = SizeRepository::new(self.db).get_names().await?;

        Ok(StockInitMatrixDto {
            matrix: build_init_matrix(stock),
            styles,
            sizes,
        })
    }

    /// Validates the request and overwrites the initial quantity of the pair
    pub async fn set_init(&self, request: StockInitRequest) -> Result<StockInitModel, Error> {
        let init = validate_stock_init(request)?;

        let stock = StockInitRepository::new(self.db)
            .upsert(init.style, init.size, init.quantity)
            .await?;

        tracing::debug!(
            "Set initial stock of {}/{} to {}",
            stock.style_name,
            stock.size_name,
            stock.quantity
        );

        Ok(stock)
    }
}

fn build_init_matrix(stock: Vec<StockInitModel>) -> BTreeMap<String, BTreeMap<String, i32>> {
    let mut matrix: BTreeMap<String, BTreeMap<String, i32>> = BTreeMap::new();

    for row in stock {
        matrix
            .entry(row.style_name)
            .or_default()
            .insert(row.size_name, row.quantity);
    }

    matrix
}
