use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
};
use tower::ServiceExt;

use super::*;

/// Expect a 400 envelope for a body that is not JSON
#[tokio::test]
async fn malformed_json_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);

    let (status, body) = send_raw(&app, Method::POST, "/api/stock/init", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect a 400 envelope for an unknown item type
#[tokio::test]
async fn unknown_item_type_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/usage/add",
        Some(json!({"user": "A", "itemType": "shoes", "style": "黑", "size": "M"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    Ok(())
}

/// Expect a 400 envelope for an id that is not a number
#[tokio::test]
async fn invalid_path_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, Method::DELETE, "/api/other-items/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    Ok(())
}

/// Expect the landing page to be served as HTML
#[tokio::test]
async fn serves_landing_page() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let resp = app.oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("/api/stock/dashboard"));

    Ok(())
}

/// Expect the OpenAPI document to list the API paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);

    let (status, body) = send(&app, Method::GET, "/api/docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/stock/dashboard"].is_object());
    assert!(body["paths"]["/api/other-items/{id}"]["delete"].is_object());

    Ok(())
}
