//! User payment confirmation and premium failure reasons.

mod energy_orders;
mod orders;
mod premium_orders;

use super::operation::order_migration;

/// Adds the nullable columns used to record a user's own payment transaction and
/// why a premium order failed.
///
/// ## Changes
///
/// - `energy_orders`: `user_tx_hash` VARCHAR(128), `user_confirmed_at` timestamptz
/// - `orders`: `user_tx_hash` VARCHAR(128), `user_confirmed_at` timestamptz,
///   `user_confirm_source` VARCHAR(32)
/// - `premium_orders`: `fail_reason` VARCHAR(512)
///
/// Every column is NULL for existing rows. Each column is its own operation because
/// SQLite only accepts one change per `ALTER TABLE`.
///
/// ## Dependencies
///
/// This migration depends on [`M0002`](super::M0002).
pub struct M0003;

order_migration!(
    M0003,
    "m0003_user_confirmation_columns",
    [super::M0002],
    [
        energy_orders::AddUserTxHash,
        energy_orders::AddUserConfirmedAt,
        orders::AddUserTxHash,
        orders::AddUserConfirmedAt,
        orders::AddUserConfirmSource,
        premium_orders::AddFailReason,
    ]
);
