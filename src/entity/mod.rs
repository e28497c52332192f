mod energy_order;
mod order;
mod order_status;
mod premium_order;
mod store_error;
mod trx_exchange_order;

pub use energy_order::EnergyOrder;
pub use order::Order;
pub use order_status::{ConfirmSource, OrderStatus};
pub use premium_order::PremiumOrder;
pub use store_error::StoreError;
pub use trx_exchange_order::TrxExchangeOrder;
