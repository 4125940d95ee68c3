mod transaction_repo;

use crate::transaction_repo::TransactionRepo;
use crate::HealthCheck;
use anyhow::Context;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, instrument, warn};

const CREATE_CATEGORIES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        type TEXT NOT NULL
    )
"#;

const CREATE_TRANSACTIONS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL,
        category TEXT NOT NULL,
        amount REAL NOT NULL,
        date TEXT NOT NULL,
        description TEXT
    )
"#;

pub struct SQLxRepo {
    pool: SqlitePool,
}

impl SQLxRepo {
    fn new(pool: SqlitePool) -> SQLxRepo {
        SQLxRepo { pool }
    }
}

#[async_trait]
impl HealthCheck for SQLxRepo {
    async fn check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(&self.pool).await {
            Ok(_) => true,
            Err(e) => {
                warn!(%e, "Health check query failed");
                false
            }
        }
    }
}

/// Opens the database, creating the file if needed, and makes sure the schema exists.
///
/// In-memory databases (`sqlite::memory:`) are private to a connection, so callers
/// should pass a `max_pool_size` of 1 for them.
pub async fn create_repos(
    database_url: &str,
    max_pool_size: u32,
) -> Result<(Arc<dyn TransactionRepo>, Arc<dyn HealthCheck>), anyhow::Error> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database url {}", database_url))?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_pool_size)
        .connect_with(options)
        .await
        .with_context(|| format!("Unable to open database {}", database_url))?;

    init_schema(&pool).await?;
    info!(database_url, "Database ready");

    let repo = Arc::new(SQLxRepo::new(pool));
    let transaction_repo: Arc<dyn TransactionRepo> = repo.clone();
    let health_check: Arc<dyn HealthCheck> = repo;
    Ok((transaction_repo, health_check))
}

#[instrument(skip(pool))]
async fn init_schema(pool: &SqlitePool) -> Result<(), anyhow::Error> {
    sqlx::query(CREATE_CATEGORIES_TABLE)
        .execute(pool)
        .await
        .context("Unable to create categories table")?;
    sqlx::query(CREATE_TRANSACTIONS_TABLE)
        .execute(pool)
        .await
        .context("Unable to create transactions table")?;
    Ok(())
}
