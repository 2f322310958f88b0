//! Connection pool and table DDL. The database file is created on first connect and the
//! three tables are created if absent; existing tables are never altered.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::sql::create_table;
use crate::tables::ALL_TABLES;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// In-memory databases live per connection, so their pool must hold exactly one
/// connection that is never recycled.
fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open the pool for `config.database_url`, creating the database file if missing.
/// Foreign keys are declared in DDL but not enforced: order writes check references
/// explicitly, and deleting a user or product leaves its orders in place.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(false);
    let pool_opts = if is_in_memory(&config.database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };
    let pool = pool_opts.connect_with(opts).await?;
    tracing::info!(database_url = %config.database_url, "connected to store");
    Ok(pool)
}

/// Create users, products and orders if they do not exist.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for table in ALL_TABLES {
        let ddl = create_table(table);
        tracing::debug!(sql = %ddl, "ensure table");
        sqlx::query(&ddl).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BIND_ADDR, DEFAULT_MAX_BODY_BYTES};

    fn memory_config() -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".into(),
            bind_addr: DEFAULT_BIND_ADDR.parse().unwrap(),
            max_connections: 5,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://shop.db?mode=memory"));
        assert!(!is_in_memory("sqlite://my_database.db"));
    }

    #[tokio::test]
    async fn ensure_tables_is_idempotent() {
        let pool = connect(&memory_config()).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        ensure_tables(&pool).await.unwrap();

        let names: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
                .fetch_all(&pool)
                .await
                .unwrap();
        let names: Vec<String> = names.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, vec!["orders", "products", "users"]);
    }

    #[tokio::test]
    async fn foreign_keys_are_not_enforced() {
        let pool = connect(&memory_config()).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        let result = sqlx::query(
            "INSERT INTO orders (user_id, product_id, description, price) VALUES (99, 99, '', 1.0)",
        )
        .execute(&pool)
        .await;
        assert!(result.is_ok());
    }
}
