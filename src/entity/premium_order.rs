use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Telegram Premium subscription gifted to `recipient_username`
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PremiumOrder {
    pub id: i32,
    pub telegram_id: i64,
    pub recipient_username: String,
    pub months: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub fail_reason: Option<String>,
}
