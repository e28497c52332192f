use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// USDT to TRX exchange order
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TrxExchangeOrder {
    pub id: i32,
    pub telegram_id: i64,
    pub receive_address: String,
    pub usdt_amount: i64,
    pub trx_amount: i64,
    pub status: String,
    // Rows imported from the old bot carry no creation time
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TrxExchangeOrder {
    /// Whether the payment window closed before `now`.
    ///
    /// Orders without an `expires_at` never expire on their own.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |expires_at| expires_at < now)
    }
}
