use axum::{extract::State, http::StatusCode};
use stockroom::server::controller::reference::{get_sizes, get_styles};

use super::*;

/// Expect 200 with the preset styles in sort order
#[tokio::test]
async fn returns_styles_in_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let result = get_styles(State(test.to_app_state())).await;
    let (status, body) = handler_json(result).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let styles = body["styles"].as_array().unwrap();
    assert_eq!(styles.len(), PRESET_STYLES.len());
    for (style, (name, sort_order)) in styles.iter().zip(PRESET_STYLES.iter()) {
        assert_eq!(style["name"], *name);
        assert_eq!(style["sort_order"], *sort_order);
    }

    Ok(())
}

/// Expect 200 with the preset sizes in sort order
#[tokio::test]
async fn returns_sizes_in_order() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;

    let result = get_sizes(State(test.to_app_state())).await;
    let (status, body) = handler_json(result).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["sizes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["XS", "S", "M", "L", "XL"]);

    Ok(())
}

/// Expect 500 with the error envelope when tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_styles(State(test.to_app_state())).await;
    let (status, body) = handler_json(result).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());

    Ok(())
}
