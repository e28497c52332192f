//! Repository tests against a real PostgreSQL.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`. Each test works
//! in its own schema so runs do not interfere.

mod common;

use chrono::{Duration, Utc};
use common::TEST_ADDRESS;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};
use std::sync::Arc;
use tron_energy_db::legacy::{address_query, energy, premium, trx_exchange};
use tron_energy_db::migrations;
use tron_energy_db::services::ExpiryService;
use tron_energy_db::{ConfirmSource, OrderStatus, StoreError};

async fn create_pg_pool(schema: &str) -> anyhow::Result<PgPool> {
    let url = std::env::var("DATABASE_URL")?;
    let admin = PgPoolOptions::new().max_connections(1).connect(&url).await?;
    admin
        .execute(format!("DROP SCHEMA IF EXISTS {schema} CASCADE; CREATE SCHEMA {schema}").as_str())
        .await?;
    admin.close().await;

    let search_path = format!("SET search_path TO {schema}");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .after_connect(move |conn, _meta| {
            let search_path = search_path.clone();
            Box::pin(async move {
                conn.execute(search_path.as_str()).await?;
                Ok(())
            })
        })
        .connect(&url)
        .await?;

    let mut conn = pool.acquire().await?;
    migrations::upgrade::<sqlx::Postgres>(&mut *conn, None).await?;

    Ok(pool)
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn exchange_orders_expire_after_the_payment_window() -> anyhow::Result<()> {
    let pool = create_pg_pool("test_exchange_expiry").await?;

    let id = trx_exchange::create_order(&pool, 42, TEST_ADDRESS, 10_000_000, 35_000_000).await?;
    let order = trx_exchange::get_order(&pool, id).await?.expect("order");
    let expires_at = order.expires_at.expect("expires_at");
    assert_eq!(expires_at - order.created_at.expect("created_at"), Duration::minutes(30));

    assert_eq!(trx_exchange::expire_overdue_orders(&pool, Utc::now()).await?, 0);
    assert_eq!(trx_exchange::expire_overdue_orders(&pool, expires_at).await?, 0);
    assert!(trx_exchange::get_overdue_orders(&pool, expires_at).await?.is_empty());
    assert!(!order.is_expired(expires_at));

    let overdue = trx_exchange::get_overdue_orders(&pool, expires_at + Duration::seconds(1)).await?;
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].id, id);
    assert_eq!(
        trx_exchange::expire_overdue_orders(&pool, expires_at + Duration::seconds(1)).await?,
        1
    );

    let order = trx_exchange::get_order(&pool, id).await?.expect("order");
    assert_eq!(order.status, OrderStatus::Expired.to_string());

    Ok(())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn user_payment_is_confirmed_once() -> anyhow::Result<()> {
    let pool = create_pg_pool("test_energy_confirm").await?;

    let id = energy::create_order(&pool, 42, TEST_ADDRESS, 65_000, 1, 3_000_000).await?;
    let confirmed_at = Utc::now();
    energy::confirm_user_payment(&pool, id, "a1b2c3", confirmed_at).await?;

    let err = energy::confirm_user_payment(&pool, id, "ffff", Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::AlreadyConfirmed(order_id) if order_id == id));

    let order = energy::get_order(&pool, id).await?.expect("order");
    assert_eq!(order.user_tx_hash.as_deref(), Some("a1b2c3"));
    assert!(order.user_confirmed_at.is_some());

    let err = energy::confirm_order_payment(&pool, 9999, "a1b2c3", ConfirmSource::Admin, Utc::now())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::OrderNotFound(9999)));

    Ok(())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn premium_failures_keep_their_reason() -> anyhow::Result<()> {
    let pool = create_pg_pool("test_premium_fail").await?;

    let (id,): (i32,) = sqlx::query_as(
        "INSERT INTO premium_orders (telegram_id, recipient_username, months, status)
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(42_i64)
    .bind("durov")
    .bind(3_i32)
    .bind(OrderStatus::Pending.to_string())
    .fetch_one(&pool)
    .await?;

    premium::mark_failed(&pool, id, "recipient not found").await?;

    let order = premium::get_order(&pool, id).await?.expect("order");
    assert_eq!(order.status, OrderStatus::Failed.to_string());
    assert_eq!(order.fail_reason.as_deref(), Some("recipient not found"));

    Ok(())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn address_lookup_collects_every_order_kind() -> anyhow::Result<()> {
    let pool = create_pg_pool("test_address_query").await?;

    energy::create_order(&pool, 42, TEST_ADDRESS, 65_000, 1, 3_000_000).await?;
    trx_exchange::create_order(&pool, 42, TEST_ADDRESS, 10_000_000, 35_000_000).await?;

    let summary = address_query::orders_by_address(&pool, TEST_ADDRESS).await?;
    assert_eq!(summary.energy_orders.len(), 1);
    assert_eq!(summary.trx_exchange_orders.len(), 1);
    assert_eq!(summary.total(), 2);

    let err = address_query::orders_by_address(&pool, "not-an-address")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidAddress(_)));

    Ok(())
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn expiry_service_closes_overdue_orders() -> anyhow::Result<()> {
    let pool = create_pg_pool("test_expiry_service").await?;

    let overdue = trx_exchange::create_order(&pool, 42, TEST_ADDRESS, 10_000_000, 35_000_000).await?;
    let fresh = trx_exchange::create_order(&pool, 42, TEST_ADDRESS, 5_000_000, 17_500_000).await?;
    sqlx::query("UPDATE trx_exchange_orders SET expires_at = $1 WHERE id = $2")
        .bind(Utc::now() - Duration::minutes(1))
        .bind(overdue)
        .execute(&pool)
        .await?;

    let mut service = ExpiryService::new(Arc::new(pool.clone()), std::time::Duration::from_millis(50));
    assert!(!service.is_running());

    service.start().await?;
    assert!(service.is_running());
    // already running, keeps the first task
    service.start().await?;
    assert!(service.is_running());

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    service.stop().await;
    assert!(!service.is_running());

    let order = trx_exchange::get_order(&pool, overdue).await?.expect("order");
    assert_eq!(order.status, OrderStatus::Expired.to_string());
    let order = trx_exchange::get_order(&pool, fresh).await?.expect("order");
    assert_eq!(order.status, OrderStatus::Pending.to_string());

    Ok(())
}
