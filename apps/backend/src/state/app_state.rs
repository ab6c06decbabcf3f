use sea_orm::DatabaseConnection;

/// Shared resources handed to every handler through `web::Data`.
///
/// The connection is an explicit dependency of each request instead of a
/// process-wide registry; cloning shares the same underlying pool.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent only in tests that never touch storage)
    db: Option<DatabaseConnection>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    /// State without a database; every storage access fails with `DB_UNAVAILABLE`.
    pub fn new_without_db() -> Self {
        Self { db: None }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
