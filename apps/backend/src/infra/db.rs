use std::str::FromStr;
use std::time::Duration;

use migration::MigrationCommand;
use sea_orm::{DatabaseConnection, SqlxPostgresConnector, SqlxSqliteConnector};
use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::config::db::{sanitize_db_url, DbKind};
use crate::error::AppError;

const POOL_MAX_CONNECTIONS: u32 = 10;
const SQLITE_BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Open a pool for `url` without running migrations.
///
/// SQLite connections always run with `foreign_keys = ON`; the delete policy
/// (cascade vs restrict) lives in the schema and is only enforced with it.
/// An in-memory SQLite database is confined to a single, never-recycled
/// connection because each new connection would otherwise see an empty store.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let kind = DbKind::from_url(url)?;

    let conn = match kind {
        DbKind::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(POOL_MAX_CONNECTIONS)
                .acquire_timeout(ACQUIRE_TIMEOUT)
                .connect(url)
                .await
                .map_err(|e| AppError::config(format!("postgres connect failed: {e}")))?;
            SqlxPostgresConnector::from_sqlx_postgres_pool(pool)
        }
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            let options = SqliteConnectOptions::from_str(url)
                .map_err(|e| AppError::config(format!("invalid sqlite url: {e}")))?
                .create_if_missing(true)
                .foreign_keys(true)
                .busy_timeout(SQLITE_BUSY_TIMEOUT);

            let pool_options = if kind == DbKind::SqliteMemory {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
            } else {
                SqlitePoolOptions::new().max_connections(POOL_MAX_CONNECTIONS)
            };

            let pool = pool_options
                .acquire_timeout(ACQUIRE_TIMEOUT)
                .connect_with(options)
                .await
                .map_err(|e| AppError::config(format!("sqlite connect failed: {e}")))?;
            SqlxSqliteConnector::from_sqlx_sqlite_pool(pool)
        }
    };

    info!(
        engine = kind.engine(),
        url = %sanitize_db_url(url),
        "database.connected"
    );
    Ok(conn)
}

/// Connect and bring the schema up to date. Single entrypoint for startup.
pub async fn bootstrap_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(url).await?;
    migration::migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
