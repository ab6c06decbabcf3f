use crate::config::db::database_url;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for `AppState` (used by `main` and by tests).
pub struct StateBuilder {
    db_url: Option<String>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { db_url: None }
    }

    /// Connect to `url` (and migrate) when building.
    pub fn with_db_url(mut self, url: impl Into<String>) -> Self {
        self.db_url = Some(url.into());
        self
    }

    /// Connect to whatever `DATABASE_URL` selects (or the default file store).
    pub fn with_env_db(self) -> Self {
        self.with_db_url(database_url())
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_url {
            // single entrypoint: connect + migrate
            Some(url) => Ok(AppState::new(bootstrap_db(&url).await?)),
            None => Ok(AppState::new_without_db()),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
