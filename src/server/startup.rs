use axum::Router;
use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Install the global tracing subscriber
///
/// The filter is read from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to the database and run migrations
///
/// Migrations create the schema and seed the preset styles and sizes on first start.
/// Applied migrations are recorded, so an existing database is never seeded twice.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    // SQLite allows one writer; a single pooled connection serializes every request.
    opt.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await?;

    let existing = SchemaManager::new(&db).has_table("styles").await?;
    if existing {
        tracing::info!("Opened existing database at {}", config.database_url);
    } else {
        tracing::info!("Creating new database at {}", config.database_url);
    }

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Build the full application: routes, state and CORS
pub fn build_app(db: DatabaseConnection) -> Router {
    router::routes()
        .with_state(AppState::from(db))
        .layer(CorsLayer::permissive())
}

/// Connect to the database and serve the API until Ctrl-C
pub async fn run(config: Config) -> Result<(), Error> {
    let db = connect_to_database(&config).await?;
    let app = build_app(db.clone());

    let listener = TcpListener::bind(config.listen_address()).await?;
    let address = listener.local_addr()?;

    tracing::info!("Listening on {}", address);
    tracing::info!("Landing page: http://localhost:{}/", address.port());
    tracing::info!("API docs: http://localhost:{}/api/docs", address.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        return;
    }

    tracing::info!("Shutdown signal received, stopping server");
}
