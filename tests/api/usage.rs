use super::*;

/// Expect an other-item entry for an unknown name to be logged but not shown on the dashboard
#[tokio::test]
async fn unknown_other_item_is_logged_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_migrations()
        .with_other_item("帽子", 5)
        .build()
        .await?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/usage/add",
        Some(json!({"user": "A", "itemType": "other", "otherItemName": "围巾", "qty": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = send(&app, Method::GET, "/api/stock/dashboard", None).await;
    let items = body["otherItems"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "帽子");
    assert_eq!(items[0]["used"], 0);

    let (_, body) = send(&app, Method::GET, "/api/usage/logs", None).await;
    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["other_item_name"], "围巾");
    assert_eq!(logs[0]["item_type"], ITEM_TYPE_OTHER);

    Ok(())
}

/// Expect deleted items to leave their usage entries in the log
#[tokio::test]
async fn deleted_item_usage_remains_in_log() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/other-items",
        Some(json!({"name": "手套", "quantity": 4})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    send(
        &app,
        Method::POST,
        "/api/usage/add",
        Some(json!({"user": "C", "itemType": "other", "otherItemName": "手套", "remark": "event"})),
    )
    .await;

    let (_, body) = send(&app, Method::GET, "/api/other-items", None).await;
    let id = body["items"][0]["id"].as_i64().unwrap();

    let uri = format!("/api/other-items/{}", id);
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, body) = send(&app, Method::GET, "/api/other-items", None).await;
    assert!(body["items"].as_array().unwrap().is_empty());

    let (_, body) = send(&app, Method::GET, "/api/usage/logs", None).await;
    let logs = body["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["other_item_name"], "手套");
    assert_eq!(logs[0]["remark"], "event");
    assert_eq!(logs[0]["quantity"], 1);

    Ok(())
}

/// Expect the newest entry first in the log
#[tokio::test]
async fn logs_newest_first() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let app = app(&test);

    for user in ["first", "second", "third"] {
        send(
            &app,
            Method::POST,
            "/api/usage/add",
            Some(json!({"user": user, "style": "黑", "size": "M"})),
        )
        .await;
    }

    let (_, body) = send(&app, Method::GET, "/api/usage/logs", None).await;
    let users: Vec<&str> = body["logs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["user_name"].as_str().unwrap())
        .collect();

    assert_eq!(users, vec!["third", "second", "first"]);

    Ok(())
}

/// Expect the update endpoint to replace an item's quantity on the dashboard
#[tokio::test]
async fn update_changes_dashboard_init() -> Result<(), TestError> {
    let test = TestBuilder::new().with_migrations().build().await?;
    let item = test.other_item().insert_other_item("帽子", 5).await?;
    let app = app(&test);

    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/api/other-items/{}", item.id),
        Some(json!({"quantity": 9})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/stock/dashboard", None).await;
    assert_eq!(body["otherItems"][0]["init"], 9);
    assert_eq!(body["otherItems"][0]["id"], item.id);

    Ok(())
}
