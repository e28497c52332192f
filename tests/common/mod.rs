use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use std::str::FromStr;

pub const TABLES: [&str; 4] = ["orders", "energy_orders", "trx_exchange_orders", "premium_orders"];

pub const TEST_ADDRESS: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

/// Single-connection in-memory database, so every query sees the same schema
pub async fn create_sqlite_pool() -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Column names of `table` in declaration order
pub async fn columns(pool: &SqlitePool, table: &str) -> anyhow::Result<Vec<String>> {
    let rows: Vec<(String,)> = sqlx::query_as("SELECT name FROM pragma_table_info(?) ORDER BY cid")
        .bind(table)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|(name,)| name).collect())
}

/// Column names of every order table
pub async fn schema(pool: &SqlitePool) -> anyhow::Result<Vec<(String, Vec<String>)>> {
    let mut schema = Vec::new();
    for table in TABLES {
        schema.push((table.to_string(), columns(pool, table).await?));
    }

    Ok(schema)
}
