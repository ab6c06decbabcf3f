use holonet::infra::state::build_state;
use holonet::{AppError, AppState};

/// Fresh, migrated in-memory database. Each call gets its own store.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state().with_db_url("sqlite::memory:").build().await
}
