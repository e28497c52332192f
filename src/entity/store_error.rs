#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx_migrator::Error),

    #[error("Invalid TRON address: {0}")]
    InvalidAddress(String),

    #[error("Order #{0} not found")]
    OrderNotFound(i32),

    #[error("Order #{0} already has a confirmed user transaction")]
    AlreadyConfirmed(i32),

    #[error("Unknown revision: {0}")]
    UnknownRevision(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}
