//! Compatibility layer for order data written by the first version of the bot.
//!
//! The old bot read and wrote the order tables directly. These modules keep that
//! access in one place on top of the migrated schema:
//!
//! - [`energy`] - energy rental orders and user payment confirmation for `orders`
//! - [`trx_exchange`] - USDT to TRX exchange orders and their payment deadline
//! - [`address_query`] - TRON address validation and per-address order lookup
//! - [`premium`] - Telegram Premium orders and their failure reasons
//!
//! All functions run against PostgreSQL.

pub mod address_query;
pub mod energy;
pub mod premium;
pub mod trx_exchange;
