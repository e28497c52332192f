pub mod cli;
pub mod entity;
pub mod legacy;
pub mod migrations;
pub mod schema;
pub mod services;
pub mod settings;

// Re-export commonly used items
pub use entity::*;
pub use migrations::{order_timeout, Backend, ORDER_TIMEOUT_MINUTES};
pub use settings::Settings;

/// Crate version reported by the binary on startup
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
