use sea_orm::DatabaseConnection;

/// State handed to every request handler.
///
/// Owns the store handle; cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Single-connection SQLite pool
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
