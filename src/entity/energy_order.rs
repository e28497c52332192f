use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Energy rental order delegated to `receive_address` for `duration_hours`
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EnergyOrder {
    pub id: i32,
    pub telegram_id: i64,
    pub receive_address: String,
    pub energy_amount: i64,
    pub duration_hours: i32,
    pub price_sun: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub user_tx_hash: Option<String>,
    pub user_confirmed_at: Option<DateTime<Utc>>,
}
