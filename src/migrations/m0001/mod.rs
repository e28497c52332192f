//! Baseline schema.
//!
//! Creates the four order tables as they existed before the expiry and
//! confirmation columns were introduced. Every table is created with
//! `IF NOT EXISTS`, so databases provisioned by the old bot adopt this revision
//! without touching their data.

mod energy_orders;
mod orders;
mod premium_orders;
mod trx_exchange_orders;

use super::operation::order_migration;

/// Creates `orders`, `energy_orders`, `trx_exchange_orders` and `premium_orders`.
///
/// ## Dependencies
///
/// None, this is the root revision.
pub struct Baseline;

order_migration!(
    Baseline,
    "baseline",
    [],
    [
        orders::CreateTable,
        energy_orders::CreateTable,
        trx_exchange_orders::CreateTable,
        premium_orders::CreateTable,
    ]
);
