//! Local relational store
//!
//! A SQLite file reached through `sqlx`. The seed script is the only writer;
//! the query surface only reads.

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions, SqliteRow,
};
use sqlx::{Executor, Row};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use top10_common::{DestinationRecord, Region};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Database configuration error: {0}. Check DATABASE_URL.")]
    Config(String),

    /// A stored row does not map back to a destination
    #[error("Invalid row {id}: {reason}")]
    InvalidRow { id: i64, reason: String },
}

impl StoreError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: crate::config::DEFAULT_DATABASE_URL.to_string(),
            max_connections: 4,
            connect_timeout_secs: 10,
        }
    }
}

/// Open a pool on the SQLite file named by `url`, creating the file if needed.
/// Parent directories are not created.
pub async fn connect(url: &str) -> StoreResult<SqlitePool> {
    create_pool(&StoreConfig::new(url)).await
}

pub async fn create_pool(config: &StoreConfig) -> StoreResult<SqlitePool> {
    if config.url.trim().is_empty() {
        return Err(StoreError::config("database URL is empty"));
    }

    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect_with(options)
        .await?;

    tracing::info!(
        url = %config.url,
        max_connections = config.max_connections,
        "Store connection pool created"
    );

    Ok(pool)
}

/// Execute a full seed script as one transaction.
///
/// SQLite DDL is transactional, so a failing statement anywhere in the script
/// leaves the previous table and rows exactly as they were.
pub async fn apply_script(pool: &SqlitePool, script: &str) -> StoreResult<()> {
    let mut tx = pool.begin().await?;
    let conn: &mut SqliteConnection = &mut tx;
    conn.execute(sqlx::raw_sql(script)).await?;
    tx.commit().await?;

    tracing::debug!(bytes = script.len(), "Seed script applied");
    Ok(())
}

/// All destinations ordered by id
pub async fn list_destinations(pool: &SqlitePool) -> StoreResult<Vec<DestinationRecord>> {
    let rows = sqlx::query(
        "SELECT id, name, state, region, lat, lon, short_desc, best_months, tags, hero_image \
         FROM destinations ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(record_from_row).collect()
}

fn record_from_row(row: &SqliteRow) -> StoreResult<DestinationRecord> {
    let id: i64 = row.try_get("id")?;
    let region: String = row.try_get("region")?;
    let region = Region::from_str(&region).map_err(|e| StoreError::InvalidRow {
        id,
        reason: e.to_string(),
    })?;

    Ok(DestinationRecord {
        id,
        name: row.try_get("name")?,
        state: row.try_get("state")?,
        region,
        lat: row.try_get("lat")?,
        lon: row.try_get("lon")?,
        short_desc: row.try_get("short_desc")?,
        best_months: row.try_get("best_months")?,
        tags: row.try_get("tags")?,
        hero_image: row.try_get("hero_image")?,
    })
}

pub async fn health_check(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(StoreError::from)
}
