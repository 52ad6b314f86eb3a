//! Database Module
//!
//! SQLite connection pool creation and idempotent schema bootstrap.
//!
//! # Initialization
//!
//! 1. [`connect`] opens the pool (creating the database file and its parent
//!    directory when needed) with foreign keys enforced
//! 2. [`init_schema`] creates tables and indexes in one transaction
//! 3. [`populate_categories`] seeds the default categories when the table is empty
//!
//! In-memory URLs (`sqlite::memory:`) are supported for tests; each
//! connection of an in-memory pool sees its own database, so callers use a
//! single connection.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Table and index definitions
const SCHEMA: &str = include_str!("schema.sql");

/// Categories inserted into an empty database, numbered from 1
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "General Discussion",
    "Programming",
    "Golang",
    "Web Development",
    "Database Systems",
    "DevOps",
    "Mobile Development",
    "Machine Learning",
    "Security",
    "Off-Topic",
];

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a connection pool for `url`
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = is_in_memory(url);
    let mut options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    if !in_memory {
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections.max(1));
    if in_memory {
        // Dropping the last connection drops the database
        pool_options = pool_options
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;
    tracing::debug!(in_memory, max_connections, "database pool opened");
    Ok(pool)
}

/// Create every table and index if missing
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::raw_sql(SCHEMA).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}

/// Insert [`DEFAULT_CATEGORIES`] unless categories already exist
pub async fn populate_categories(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&mut *tx)
        .await?;
    if count > 0 {
        return Ok(());
    }

    for (index, name) in DEFAULT_CATEGORIES.iter().enumerate() {
        sqlx::query(
            "INSERT INTO categories (category_id, category_number, category_name) VALUES (?, ?, ?)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(index as i64 + 1)
        .bind(*name)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(count = DEFAULT_CATEGORIES.len(), "seeded default categories");
    Ok(())
}

/// Connect, create the schema and seed categories
pub async fn initialize(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let pool = connect(url, max_connections).await?;
    init_schema(&pool).await?;
    populate_categories(&pool).await?;
    Ok(pool)
}

/// Fresh in-memory database with the full schema
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    initialize("sqlite::memory:", 1)
        .await
        .expect("Failed to create in-memory database")
}
