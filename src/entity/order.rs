use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic payment order
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i32,
    pub telegram_id: i64,
    pub receive_address: String,
    pub amount_sun: i64,
    pub status: String,
    pub tx_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_tx_hash: Option<String>,
    pub user_confirmed_at: Option<DateTime<Utc>>,
    pub user_confirm_source: Option<String>, // see ConfirmSource
}
