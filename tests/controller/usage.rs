use axum::{extract::State, http::StatusCode, Json};
use stockroom::{
    model::usage::{AddUsageRequest, ItemType},
    server::controller::usage::{add_usage, get_usage_logs},
};

use super::*;

mod add_usage {
    use super::*;

    /// Expect 200 with the new id and a message
    #[tokio::test]
    async fn returns_id() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_migrations()
            .with_stock_init("黑", "M", 10)
            .build()
            .await?;

        let result = add_usage(
            State(test.to_app_state()),
            Ok(Json(AddUsageRequest {
                user: Some("A".to_string()),
                style: Some("黑".to_string()),
                size: Some("M".to_string()),
                qty: Some(3),
                ..Default::default()
            })),
        )
        .await;
        let (status, body) = handler_json(result).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["id"].as_i64().unwrap() > 0);
        assert!(body["message"].is_string());

        Ok(())
    }

    /// Expect 400 when an other-item entry has no item name
    #[tokio::test]
    async fn rejects_other_without_name() -> Result<(), TestError> {
        let test = TestBuilder::new().with_migrations().build().await?;

        let result = add_usage(
            State(test.to_app_state()),
            Ok(Json(AddUsageRequest {
                user: Some("A".to_string()),
                item_type: Some(ItemType::Other),
                ..Default::default()
            })),
        )
        .await;
        let (status, body) = handler_json(result).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        Ok(())
    }

    /// Expect 400 without a user name
    #[tokio::test]
    async fn rejects_missing_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_migrations().build().await?;

        let result = add_usage(
            State(test.to_app_state()),
            Ok(Json(AddUsageRequest {
                style: Some("黑".to_string()),
                size: Some("M".to_string()),
                ..Default::default()
            })),
        )
        .await;
        let (status, _) = handler_json(result).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod get_usage_logs {
    use super::*;

    /// Expect every entry with the stored fields
    #[tokio::test]
    async fn returns_logs() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_migrations()
            .with_clothing_usage(TEST_USER_NAME, "黑", "M", 2)
            .build()
            .await?;

        let result = get_usage_logs(State(test.to_app_state())).await;
        let (status, body) = handler_json(result).await;

        assert_eq!(status, StatusCode::OK);
        let logs = body["logs"].as_array().unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0]["user_name"], TEST_USER_NAME);
        assert_eq!(logs[0]["item_type"], ITEM_TYPE_CLOTHING);
        assert_eq!(logs[0]["quantity"], 2);
        assert!(logs[0]["remark"].is_null());
        assert!(logs[0]["other_item_name"].is_null());

        Ok(())
    }
}
