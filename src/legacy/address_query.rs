use crate::entity::{EnergyOrder, Order, StoreError, TrxExchangeOrder};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde::Serialize;
use sqlx::PgPool;

/// Version byte of TRON mainnet addresses
const TRON_ADDRESS_PREFIX: u8 = 0x41;

/// 1 version byte + 20 byte account id + 4 byte checksum
const TRON_ADDRESS_BYTES: usize = 25;

/// Orders of every kind delivered to one address
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressSummary {
    pub address: String,
    pub orders: Vec<Order>,
    pub energy_orders: Vec<EnergyOrder>,
    pub trx_exchange_orders: Vec<TrxExchangeOrder>,
}

impl AddressSummary {
    pub fn total(&self) -> usize {
        self.orders.len() + self.energy_orders.len() + self.trx_exchange_orders.len()
    }
}

// Validate TRON base58 address
pub fn validate_tron_address(address: &str) -> bool {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^T[1-9A-HJ-NP-Za-km-z]{33}$").unwrap();
    }

    if !RE.is_match(address) {
        return false;
    }

    match bs58::decode(address).into_vec() {
        Ok(bytes) => bytes.len() == TRON_ADDRESS_BYTES && bytes[0] == TRON_ADDRESS_PREFIX,
        Err(_) => false,
    }
}

/// Collect every order delivered to `address`, newest first
pub async fn orders_by_address(pool: &PgPool, address: &str) -> Result<AddressSummary, StoreError> {
    let address = address.trim();
    if !validate_tron_address(address) {
        return Err(StoreError::InvalidAddress(address.to_string()));
    }

    let orders = sqlx::query_as::<_, Order>(
        "SELECT * FROM orders WHERE receive_address = $1 ORDER BY created_at DESC",
    )
    .bind(address)
    .fetch_all(pool)
    .await?;

    let energy_orders = sqlx::query_as::<_, EnergyOrder>(
        "SELECT * FROM energy_orders WHERE receive_address = $1 ORDER BY created_at DESC",
    )
    .bind(address)
    .fetch_all(pool)
    .await?;

    let trx_exchange_orders = sqlx::query_as::<_, TrxExchangeOrder>(
        "SELECT * FROM trx_exchange_orders
         WHERE receive_address = $1
         ORDER BY created_at DESC NULLS LAST",
    )
    .bind(address)
    .fetch_all(pool)
    .await?;

    let summary = AddressSummary {
        address: address.to_string(),
        orders,
        energy_orders,
        trx_exchange_orders,
    };
    debug!("Found {} orders for address {}", summary.total(), address);

    Ok(summary)
}
