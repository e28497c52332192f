//! Expiry backfill for TRX exchange orders created before `expires_at` existed.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use sea_query::{Expr, Query};
use sea_query_binder::{SqlxBinder, SqlxValues};

use super::Backend;
use crate::schema::TrxExchangeOrders;

/// Minutes a TRX exchange order stays payable after it is created
pub const ORDER_TIMEOUT_MINUTES: i64 = 30;

/// Payment window of a TRX exchange order
pub fn order_timeout() -> Duration {
    Duration::minutes(ORDER_TIMEOUT_MINUTES)
}

/// Expiry of an order created at `created_at`, or at `now` when the creation time
/// was never recorded.
pub fn expiry_for(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    created_at.unwrap_or(now) + order_timeout()
}

/// Row still waiting for its `expires_at`
#[derive(Debug, sqlx::FromRow)]
pub struct PendingExpiry {
    pub id: i32,
    pub created_at: Option<DateTime<Utc>>,
}

/// Writes `expires_at` for every TRX exchange order that has none yet.
///
/// `now` stands in for missing creation times. Rows that already carry an
/// `expires_at` are left alone. Returns the number of rows written.
pub async fn backfill_expires_at<DB>(
    connection: &mut DB::Connection,
    now: DateTime<Utc>,
) -> Result<u64, sqlx::Error>
where
    DB: Backend,
    for<'c> &'c mut DB::Connection: sqlx::Executor<'c, Database = DB>,
    SqlxValues: for<'q> sqlx::IntoArguments<'q, DB>,
    PendingExpiry: for<'r> sqlx::FromRow<'r, DB::Row>,
    DB::QueryResult: Into<sqlx::any::AnyQueryResult>,
{
    let (sql, values) = Query::select()
        .columns([TrxExchangeOrders::Id, TrxExchangeOrders::CreatedAt])
        .from(TrxExchangeOrders::Table)
        .and_where(Expr::col(TrxExchangeOrders::ExpiresAt).is_null())
        .build_sqlx(DB::Builder::default());

    let rows: Vec<PendingExpiry> = sqlx::query_as_with(&sql, values)
        .fetch_all(&mut *connection)
        .await?;

    let mut written: u64 = 0;
    for row in &rows {
        let expires_at = expiry_for(row.created_at, now);
        debug!(
            "Backfilling expires_at for TRX exchange order #{}: {}",
            row.id, expires_at
        );

        let (sql, values) = Query::update()
            .table(TrxExchangeOrders::Table)
            .value(TrxExchangeOrders::ExpiresAt, expires_at)
            .and_where(Expr::col(TrxExchangeOrders::Id).eq(row.id))
            .and_where(Expr::col(TrxExchangeOrders::ExpiresAt).is_null())
            .build_sqlx(DB::Builder::default());

        written += sqlx::query_with(&sql, values)
            .execute(&mut *connection)
            .await
            .map(Into::<sqlx::any::AnyQueryResult>::into)?
            .rows_affected();
    }

    info!("Backfilled expires_at for {} TRX exchange orders", written);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn expiry_adds_thirty_minutes_to_creation() {
        let created_at = Utc.with_ymd_and_hms(2024, 3, 9, 23, 45, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        assert_eq!(
            expiry_for(Some(created_at), now),
            Utc.with_ymd_and_hms(2024, 3, 10, 0, 15, 0).unwrap()
        );
    }

    #[test]
    fn expiry_falls_back_to_now() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();

        assert_eq!(
            expiry_for(None, now),
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()
        );
    }
}
