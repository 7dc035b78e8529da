// ABOUTME: Database connection management
// ABOUTME: Configures the shared SQLite pool and runs embedded migrations

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};

/// Open the shared SQLite pool and bring the schema up to date.
///
/// All requests check connections out of this bounded pool; there is no
/// per-request connection open/close.
pub async fn init_pool(database_path: Option<PathBuf>) -> StorageResult<SqlitePool> {
    let database_path =
        database_path.unwrap_or_else(|| PathBuf::from(kiosk_config::constants::DEFAULT_DB_PATH));

    // Ensure parent directory exists
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
        }
    }

    let database_url = format!("sqlite:{}?mode=rwc", database_path.display());

    debug!("Connecting to database: {}", database_url);

    // Configure connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&database_url)
        .await
        .map_err(StorageError::Sqlx)?;

    // Configure SQLite settings
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    info!("Database connection established");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(StorageError::Migration)?;

    debug!("Database migrations completed");

    Ok(pool)
}
