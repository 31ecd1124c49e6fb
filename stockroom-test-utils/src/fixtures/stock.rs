use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn stock<'a>(&'a self) -> StockFixtures<'a> {
        StockFixtures { setup: self }
    }
}

pub struct StockFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> StockFixtures<'a> {
    pub async fn insert_stock_init(
        &self,
        style_name: &str,
        size_name: &str,
        quantity: i32,
    ) -> Result<entity::stock_init::Model, TestError> {
        Ok(
            entity::prelude::StockInit::insert(entity::stock_init::ActiveModel {
                style_name: ActiveValue::Set(style_name.to_string()),
                size_name: ActiveValue::Set(size_name.to_string()),
                quantity: ActiveValue::Set(quantity),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
