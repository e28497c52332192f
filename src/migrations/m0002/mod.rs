//! TRX exchange order expiry.
//!
//! Orders now carry an explicit payment deadline instead of deriving it from
//! `created_at` at read time.

mod add_expires_at;
mod backfill_expires_at;

use super::operation::order_migration;

/// Adds `trx_exchange_orders.expires_at` and backfills it for existing rows.
///
/// ## Changes
///
/// - Adds `expires_at` (timestamp with time zone, NULL)
/// - Sets `expires_at = coalesce(created_at, now) + 30 minutes` on every row that
///   existed before the column
///
/// Reverting drops the column, which discards the backfilled values with it.
///
/// ## Dependencies
///
/// This migration depends on [`Baseline`](super::Baseline).
pub struct M0002;

order_migration!(
    M0002,
    "m0002_trx_exchange_expires_at",
    [super::Baseline],
    [
        add_expires_at::Operation,
        backfill_expires_at::Operation,
    ]
);
