use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::StoreError;

/// Status shared by every order table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Paid,
    Completed,
    Expired,
    Failed,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::Paid => write!(f, "PAID"),
            OrderStatus::Completed => write!(f, "COMPLETED"),
            OrderStatus::Expired => write!(f, "EXPIRED"),
            OrderStatus::Failed => write!(f, "FAILED"),
            OrderStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderStatus::Pending),
            "PAID" => Ok(OrderStatus::Paid),
            "COMPLETED" => Ok(OrderStatus::Completed),
            "EXPIRED" => Ok(OrderStatus::Expired),
            "FAILED" => Ok(OrderStatus::Failed),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(StoreError::InvalidValue {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// Who reported the user's payment transaction for an order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConfirmSource {
    /// The user pasted the transaction hash into the bot
    UserSubmitted,
    /// The chain scanner matched an incoming transfer
    ChainScan,
    /// An operator confirmed it by hand
    Admin,
}

impl std::fmt::Display for ConfirmSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmSource::UserSubmitted => write!(f, "USER_SUBMITTED"),
            ConfirmSource::ChainScan => write!(f, "CHAIN_SCAN"),
            ConfirmSource::Admin => write!(f, "ADMIN"),
        }
    }
}

impl FromStr for ConfirmSource {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER_SUBMITTED" => Ok(ConfirmSource::UserSubmitted),
            "CHAIN_SCAN" => Ok(ConfirmSource::ChainScan),
            "ADMIN" => Ok(ConfirmSource::Admin),
            other => Err(StoreError::InvalidValue {
                field: "user_confirm_source",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_parse_back() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Completed,
            OrderStatus::Expired,
            OrderStatus::Failed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.to_string().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "pending".parse::<OrderStatus>().unwrap_err();
        assert!(matches!(err, StoreError::InvalidValue { field: "status", .. }));
    }

    #[test]
    fn confirm_source_fits_its_column() {
        for source in [
            ConfirmSource::UserSubmitted,
            ConfirmSource::ChainScan,
            ConfirmSource::Admin,
        ] {
            assert!(source.to_string().len() <= crate::schema::CONFIRM_SOURCE_LEN as usize);
        }
        assert_eq!(
            "CHAIN_SCAN".parse::<ConfirmSource>().unwrap(),
            ConfirmSource::ChainScan
        );
    }
}
