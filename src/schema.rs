//! Table and column identifiers for the order tables.
//!
//! Used with sea-query to build the migration statements and the backfill queries, so
//! the identifiers are written once and rendered for whichever backend runs them.

use sea_query::Iden;

/// Generic payment orders: `orders`
#[derive(Iden, Clone, Copy)]
pub enum Orders {
    Table,
    Id,
    TelegramId,
    ReceiveAddress,
    AmountSun,
    Status,
    TxHash,
    CreatedAt,
    UserTxHash,
    UserConfirmedAt,
    UserConfirmSource,
}

/// Energy rental orders: `energy_orders`
#[derive(Iden, Clone, Copy)]
pub enum EnergyOrders {
    Table,
    Id,
    TelegramId,
    ReceiveAddress,
    EnergyAmount,
    DurationHours,
    PriceSun,
    Status,
    CreatedAt,
    UserTxHash,
    UserConfirmedAt,
}

/// USDT to TRX exchange orders: `trx_exchange_orders`
#[derive(Iden, Clone, Copy)]
pub enum TrxExchangeOrders {
    Table,
    Id,
    TelegramId,
    ReceiveAddress,
    UsdtAmount,
    TrxAmount,
    Status,
    CreatedAt,
    ExpiresAt,
}

/// Telegram Premium gift orders: `premium_orders`
#[derive(Iden, Clone, Copy)]
pub enum PremiumOrders {
    Table,
    Id,
    TelegramId,
    RecipientUsername,
    Months,
    Status,
    CreatedAt,
    FailReason,
}

/// Width of `user_tx_hash` columns. TRON transaction ids are 64 hex chars.
pub const TX_HASH_LEN: u32 = 128;

/// Width of `orders.user_confirm_source`
pub const CONFIRM_SOURCE_LEN: u32 = 32;

/// Width of `premium_orders.fail_reason`
pub const FAIL_REASON_LEN: u32 = 512;

/// Width of TRON address columns
pub const ADDRESS_LEN: u32 = 64;

/// Width of status columns
pub const STATUS_LEN: u32 = 20;
