use crate::entity::{OrderStatus, StoreError, TrxExchangeOrder};
use crate::migrations::backfill::expiry_for;
use chrono::{DateTime, Utc};
use log::info;
use sqlx::{PgPool, Row};

/// Create a pending exchange order payable until `now + 30 minutes`
pub async fn create_order(
    pool: &PgPool,
    telegram_id: i64,
    receive_address: &str,
    usdt_amount: i64,
    trx_amount: i64,
) -> Result<i32, StoreError> {
    let now = Utc::now();
    let expires_at = expiry_for(Some(now), now);

    let row = sqlx::query(
        "INSERT INTO trx_exchange_orders (
            telegram_id, receive_address, usdt_amount, trx_amount,
            status, created_at, expires_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id",
    )
    .bind(telegram_id)
    .bind(receive_address)
    .bind(usdt_amount)
    .bind(trx_amount)
    .bind(OrderStatus::Pending.to_string())
    .bind(now)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    let id: i32 = row.try_get("id")?;
    info!(
        "Created TRX exchange order with ID: {} (expires at {})",
        id, expires_at
    );

    Ok(id)
}

/// Get a specific exchange order by ID
pub async fn get_order(pool: &PgPool, order_id: i32) -> Result<Option<TrxExchangeOrder>, StoreError> {
    let order =
        sqlx::query_as::<_, TrxExchangeOrder>("SELECT * FROM trx_exchange_orders WHERE id = $1")
            .bind(order_id)
            .fetch_optional(pool)
            .await?;

    Ok(order)
}

/// Get pending orders whose payment window closed before `now`
pub async fn get_overdue_orders(
    pool: &PgPool,
    now: DateTime<Utc>,
) -> Result<Vec<TrxExchangeOrder>, StoreError> {
    let rows = sqlx::query_as::<_, TrxExchangeOrder>(
        "SELECT * FROM trx_exchange_orders
         WHERE status = $1 AND expires_at < $2
         ORDER BY expires_at ASC",
    )
    .bind(OrderStatus::Pending.to_string())
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Mark every pending order whose payment window closed before `now` as expired
pub async fn expire_overdue_orders(pool: &PgPool, now: DateTime<Utc>) -> Result<u64, StoreError> {
    let result = sqlx::query(
        "UPDATE trx_exchange_orders
         SET status = $1
         WHERE status = $2 AND expires_at < $3",
    )
    .bind(OrderStatus::Expired.to_string())
    .bind(OrderStatus::Pending.to_string())
    .bind(now)
    .execute(pool)
    .await?;

    let count = result.rows_affected();
    if count > 0 {
        info!("Expired {} overdue TRX exchange orders", count);
    }

    Ok(count)
}
