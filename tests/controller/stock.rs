use axum::{extract::State, http::StatusCode, Json};
use stockroom::{
    model::stock::StockInitRequest,
    server::controller::stock::{get_dashboard, get_stock_init, set_stock_init},
};

use super::*;

fn init_request(style: &str, size: &str, qty: Option<i32>) -> StockInitRequest {
    StockInitRequest {
        style: Some(style.to_string()),
        size: Some(size.to_string()),
        qty,
    }
}

mod set_stock_init {
    use super::*;

    /// Expect 200 with a message when all fields are given
    #[tokio::test]
    async fn saves_quantity() -> Result<(), TestError> {
        let test = TestBuilder::new().with_migrations().build().await?;

        let result = set_stock_init(
            State(test.to_app_state()),
            Ok(Json(init_request("黑", "M", Some(10)))),
        )
        .await;
        let (status, body) = handler_json(result).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["message"].is_string());

        Ok(())
    }

    /// Expect 400 when the quantity is absent
    #[tokio::test]
    async fn rejects_missing_quantity() -> Result<(), TestError> {
        let test = TestBuilder::new().with_migrations().build().await?;

        let result = set_stock_init(
            State(test.to_app_state()),
            Ok(Json(init_request("黑", "M", None))),
        )
        .await;
        let (status, body) = handler_json(result).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());

        Ok(())
    }
}

mod get_stock_init {
    use super::*;

    /// Expect the matrix keyed by style then size, with every preset label
    #[tokio::test]
    async fn returns_matrix() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_migrations()
            .with_stock_init("灰蓝", "XS", 2)
            .build()
            .await?;

        let result = get_stock_init(State(test.to_app_state())).await;
        let (status, body) = handler_json(result).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matrix"]["灰蓝"]["XS"], 2);
        assert_eq!(body["styles"].as_array().unwrap().len(), PRESET_STYLES.len());
        assert_eq!(body["sizes"].as_array().unwrap().len(), PRESET_SIZES.len());

        Ok(())
    }
}

mod get_dashboard {
    use super::*;

    /// Expect init, used and remain for tracked pairs and other items
    #[tokio::test]
    async fn returns_remaining_stock() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_migrations()
            .with_stock_init("黑", "M", 10)
            .with_clothing_usage("A", "黑", "M", 3)
            .with_other_item("帽子", 2)
            .with_other_usage("A", "帽子", 5)
            .build()
            .await?;

        let result = get_dashboard(State(test.to_app_state())).await;
        let (status, body) = handler_json(result).await;

        assert_eq!(status, StatusCode::OK);
        let cell = &body["clothing"]["matrix"]["黑"]["M"];
        assert_eq!(cell["init"], 10);
        assert_eq!(cell["used"], 3);
        assert_eq!(cell["remain"], 7);

        let items = body["otherItems"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "帽子");
        assert_eq!(items[0]["remain"], -3);

        Ok(())
    }
}
