use sea_query::{ColumnDef, Table, TableAlterStatement};

use crate::migrations::operation::schema_operation;
use crate::schema::{EnergyOrders, TX_HASH_LEN};

pub struct AddUserTxHash;

fn add_user_tx_hash() -> TableAlterStatement {
    Table::alter()
        .table(EnergyOrders::Table)
        .add_column(
            ColumnDef::new(EnergyOrders::UserTxHash)
                .string_len(TX_HASH_LEN)
                .null(),
        )
        .to_owned()
}

fn drop_user_tx_hash() -> TableAlterStatement {
    Table::alter()
        .table(EnergyOrders::Table)
        .drop_column(EnergyOrders::UserTxHash)
        .to_owned()
}

schema_operation!(AddUserTxHash, add_user_tx_hash, drop_user_tx_hash);

pub struct AddUserConfirmedAt;

fn add_user_confirmed_at() -> TableAlterStatement {
    Table::alter()
        .table(EnergyOrders::Table)
        .add_column(
            ColumnDef::new(EnergyOrders::UserConfirmedAt)
                .timestamp_with_time_zone()
                .null(),
        )
        .to_owned()
}

fn drop_user_confirmed_at() -> TableAlterStatement {
    Table::alter()
        .table(EnergyOrders::Table)
        .drop_column(EnergyOrders::UserConfirmedAt)
        .to_owned()
}

schema_operation!(
    AddUserConfirmedAt,
    add_user_confirmed_at,
    drop_user_confirmed_at
);
