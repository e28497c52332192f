use crate::entity::{ConfirmSource, EnergyOrder, Order, OrderStatus, StoreError};
use chrono::{DateTime, Utc};
use log::{info, warn};
use sqlx::{PgPool, Row};

/// Create a pending energy rental order
pub async fn create_order(
    pool: &PgPool,
    telegram_id: i64,
    receive_address: &str,
    energy_amount: i64,
    duration_hours: i32,
    price_sun: i64,
) -> Result<i32, StoreError> {
    let row = sqlx::query(
        "INSERT INTO energy_orders (
            telegram_id, receive_address, energy_amount,
            duration_hours, price_sun, status, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id",
    )
    .bind(telegram_id)
    .bind(receive_address)
    .bind(energy_amount)
    .bind(duration_hours)
    .bind(price_sun)
    .bind(OrderStatus::Pending.to_string())
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    let id: i32 = row.try_get("id")?;
    info!("Created energy order with ID: {}", id);

    Ok(id)
}

/// Get a specific energy order by ID
pub async fn get_order(pool: &PgPool, order_id: i32) -> Result<Option<EnergyOrder>, StoreError> {
    let order = sqlx::query_as::<_, EnergyOrder>("SELECT * FROM energy_orders WHERE id = $1")
        .bind(order_id)
        .fetch_optional(pool)
        .await?;

    Ok(order)
}

/// Record the transaction the user paid an energy order with.
///
/// A hash that is already recorded is never replaced.
pub async fn confirm_user_payment(
    pool: &PgPool,
    order_id: i32,
    tx_hash: &str,
    confirmed_at: DateTime<Utc>,
) -> Result<(), StoreError> {
    let result = sqlx::query(
        "UPDATE energy_orders
         SET user_tx_hash = $1, user_confirmed_at = $2
         WHERE id = $3 AND user_tx_hash IS NULL",
    )
    .bind(tx_hash)
    .bind(confirmed_at)
    .bind(order_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return match get_order(pool, order_id).await? {
            Some(_) => {
                warn!("Energy order #{} already has a user transaction", order_id);
                Err(StoreError::AlreadyConfirmed(order_id))
            }
            None => Err(StoreError::OrderNotFound(order_id)),
        };
    }

    info!(
        "Confirmed user payment for energy order #{}: {}",
        order_id, tx_hash
    );
    Ok(())
}

/// Get a specific payment order by ID
pub async fn get_payment_order(pool: &PgPool, order_id: i32) -> Result<Option<Order>, StoreError> {
    let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(order_id)
        .fetch_optional(pool)
        .await?;

    Ok(order)
}

/// Record the transaction the user paid a generic order with and who reported it.
///
/// A hash that is already recorded is never replaced.
pub async fn confirm_order_payment(
    pool: &PgPool,
    order_id: i32,
    tx_hash: &str,
    source: ConfirmSource,
    confirmed_at: DateTime<Utc>,
) -> Result<(), StoreError> {
    let result = sqlx::query(
        "UPDATE orders
         SET user_tx_hash = $1, user_confirmed_at = $2, user_confirm_source = $3
         WHERE id = $4 AND user_tx_hash IS NULL",
    )
    .bind(tx_hash)
    .bind(confirmed_at)
    .bind(source.to_string())
    .bind(order_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return match get_payment_order(pool, order_id).await? {
            Some(_) => {
                warn!("Order #{} already has a user transaction", order_id);
                Err(StoreError::AlreadyConfirmed(order_id))
            }
            None => Err(StoreError::OrderNotFound(order_id)),
        };
    }

    info!(
        "Confirmed user payment for order #{} via {}: {}",
        order_id, source, tx_hash
    );
    Ok(())
}
