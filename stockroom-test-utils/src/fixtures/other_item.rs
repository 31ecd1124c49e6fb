use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn other_item<'a>(&'a self) -> OtherItemFixtures<'a> {
        OtherItemFixtures { setup: self }
    }
}

pub struct OtherItemFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> OtherItemFixtures<'a> {
    pub async fn insert_other_item(
        &self,
        name: &str,
        initial_quantity: i32,
    ) -> Result<entity::other_item::Model, TestError> {
        Ok(
            entity::prelude::OtherItem::insert(entity::other_item::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                initial_quantity: ActiveValue::Set(initial_quantity),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
