use sea_query::{ColumnDef, Table, TableAlterStatement};

use crate::migrations::operation::schema_operation;
use crate::schema::{Orders, CONFIRM_SOURCE_LEN, TX_HASH_LEN};

pub struct AddUserTxHash;

fn add_user_tx_hash() -> TableAlterStatement {
    Table::alter()
        .table(Orders::Table)
        .add_column(
            ColumnDef::new(Orders::UserTxHash)
                .string_len(TX_HASH_LEN)
                .null(),
        )
        .to_owned()
}

fn drop_user_tx_hash() -> TableAlterStatement {
    Table::alter()
        .table(Orders::Table)
        .drop_column(Orders::UserTxHash)
        .to_owned()
}

schema_operation!(AddUserTxHash, add_user_tx_hash, drop_user_tx_hash);

pub struct AddUserConfirmedAt;

fn add_user_confirmed_at() -> TableAlterStatement {
    Table::alter()
        .table(Orders::Table)
        .add_column(
            ColumnDef::new(Orders::UserConfirmedAt)
                .timestamp_with_time_zone()
                .null(),
        )
        .to_owned()
}

fn drop_user_confirmed_at() -> TableAlterStatement {
    Table::alter()
        .table(Orders::Table)
        .drop_column(Orders::UserConfirmedAt)
        .to_owned()
}

schema_operation!(
    AddUserConfirmedAt,
    add_user_confirmed_at,
    drop_user_confirmed_at
);

pub struct AddUserConfirmSource;

fn add_user_confirm_source() -> TableAlterStatement {
    Table::alter()
        .table(Orders::Table)
        .add_column(
            ColumnDef::new(Orders::UserConfirmSource)
                .string_len(CONFIRM_SOURCE_LEN)
                .null(),
        )
        .to_owned()
}

fn drop_user_confirm_source() -> TableAlterStatement {
    Table::alter()
        .table(Orders::Table)
        .drop_column(Orders::UserConfirmSource)
        .to_owned()
}

schema_operation!(
    AddUserConfirmSource,
    add_user_confirm_source,
    drop_user_confirm_source
);
