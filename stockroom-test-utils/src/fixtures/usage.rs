use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{ITEM_TYPE_CLOTHING, ITEM_TYPE_OTHER},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn usage<'a>(&'a self) -> UsageFixtures<'a> {
        UsageFixtures { setup: self }
    }
}

pub struct UsageFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UsageFixtures<'a> {
    pub async fn insert_clothing_usage(
        &self,
        user_name: &str,
        style_name: &str,
        size_name: &str,
        quantity: i32,
    ) -> Result<entity::usage_log::Model, TestError> {
        self.insert_clothing_usage_at(
            user_name,
            style_name,
            size_name,
            quantity,
            Utc::now().naive_utc(),
        )
        .await
    }

    /// Insert a clothing usage entry with an explicit creation timestamp, for ordering tests
    pub async fn insert_clothing_usage_at(
        &self,
        user_name: &str,
        style_name: &str,
        size_name: &str,
        quantity: i32,
        created_at: NaiveDateTime,
    ) -> Result<entity::usage_log::Model, TestError> {
        self.insert(entity::usage_log::ActiveModel {
            user_name: ActiveValue::Set(user_name.to_string()),
            item_type: ActiveValue::Set(ITEM_TYPE_CLOTHING.to_string()),
            style_name: ActiveValue::Set(Some(style_name.to_string())),
            size_name: ActiveValue::Set(Some(size_name.to_string())),
            other_item_name: ActiveValue::Set(None),
            quantity: ActiveValue::Set(quantity),
            remark: ActiveValue::Set(None),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        })
        .await
    }

    pub async fn insert_other_usage(
        &self,
        user_name: &str,
        other_item_name: &str,
        quantity: i32,
    ) -> Result<entity::usage_log::Model, TestError> {
        self.insert(entity::usage_log::ActiveModel {
            user_name: ActiveValue::Set(user_name.to_string()),
            item_type: ActiveValue::Set(ITEM_TYPE_OTHER.to_string()),
            style_name: ActiveValue::Set(None),
            size_name: ActiveValue::Set(None),
            other_item_name: ActiveValue::Set(Some(other_item_name.to_string())),
            quantity: ActiveValue::Set(quantity),
            remark: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .await
    }

    async fn insert(
        &self,
        usage: entity::usage_log::ActiveModel,
    ) -> Result<entity::usage_log::Model, TestError> {
        Ok(entity::prelude::UsageLog::insert(usage)
            .exec_with_returning(&self.setup.db)
            .await?)
    }
}
