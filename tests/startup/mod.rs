//! Tests for database startup against a real SQLite file.
//!
//! Verifies first-start seeding and that reopening an existing file keeps every row
//! without seeding the presets again.

use std::path::PathBuf;

use chrono::Utc;
use sea_orm::EntityTrait;
use stockroom::{
    model::{other_item::CreateOtherItemRequest, stock::StockInitRequest, usage::AddUsageRequest},
    server::{
        config::Config,
        service::{other_item::OtherItemService, stock::StockService, usage::UsageService},
        startup::connect_to_database,
    },
};
use stockroom_test_utils::prelude::*;

/// A database file under the system temp directory, removed on drop
struct TempDatabase {
    path: PathBuf,
}

impl TempDatabase {
    fn new(label: &str) -> Self {
        let file_name = format!(
            "stockroom-{}-{}-{}.db",
            label,
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        );

        Self {
            path: std::env::temp_dir().join(file_name),
        }
    }

    fn config(&self) -> Config {
        Config {
            bind_address: "127.0.0.1".to_string(),
            port: 0,
            database_url: format!("sqlite://{}?mode=rwc", self.path.display()),
        }
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Expect the presets to be seeded when the file does not exist yet
#[tokio::test]
async fn seeds_new_database() {
    let temp = TempDatabase::new("seed");

    let db = connect_to_database(&temp.config()).await.unwrap();

    let styles = entity::prelude::Style::find().all(&db).await.unwrap();
    let sizes = entity::prelude::Size::find().all(&db).await.unwrap();
    assert_eq!(styles.len(), PRESET_STYLES.len());
    assert_eq!(sizes.len(), PRESET_SIZES.len());

    db.close().await.unwrap();
}

/// Expect all rows preserved and no duplicate presets after reopening the file
#[tokio::test]
async fn restart_preserves_rows_without_reseeding() {
    let temp = TempDatabase::new("restart");

    let db = connect_to_database(&temp.config()).await.unwrap();
    StockService::new(&db)
        .set_init(StockInitRequest {
            style: Some("黑".to_string()),
            size: Some("M".to_string()),
            qty: Some(10),
        })
        .await
        .unwrap();
    OtherItemService::new(&db)
        .create(CreateOtherItemRequest {
            name: Some("帽子".to_string()),
            quantity: Some(5),
        })
        .await
        .unwrap();
    let usage_id = UsageService::new(&db)
        .add_usage(AddUsageRequest {
            user: Some("A".to_string()),
            style: Some("黑".to_string()),
            size: Some("M".to_string()),
            qty: Some(3),
            remark: Some("event".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let logs_before = UsageService::new(&db).get_logs().await.unwrap();
    db.close().await.unwrap();

    let db = connect_to_database(&temp.config()).await.unwrap();

    let styles = entity::prelude::Style::find().all(&db).await.unwrap();
    let sizes = entity::prelude::Size::find().all(&db).await.unwrap();
    assert_eq!(styles.len(), PRESET_STYLES.len());
    assert_eq!(sizes.len(), PRESET_SIZES.len());

    let init = StockService::new(&db).get_init_matrix().await.unwrap();
    assert_eq!(init.matrix["黑"]["M"], 10);

    let items = OtherItemService::new(&db).get_all().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "帽子");
    assert_eq!(items[0].initial_quantity, 5);

    let logs_after = UsageService::new(&db).get_logs().await.unwrap();
    assert_eq!(logs_after, logs_before);
    assert_eq!(logs_after[0].id, usage_id);

    db.close().await.unwrap();
}
