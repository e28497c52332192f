use sea_query::{ColumnDef, Expr, Table, TableCreateStatement, TableDropStatement};

use crate::migrations::operation::schema_operation;
use crate::schema::{Orders, ADDRESS_LEN, STATUS_LEN, TX_HASH_LEN};

pub struct CreateTable;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Orders::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Orders::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Orders::TelegramId).big_integer().not_null())
        .col(
            ColumnDef::new(Orders::ReceiveAddress)
                .string_len(ADDRESS_LEN)
                .not_null(),
        )
        .col(ColumnDef::new(Orders::AmountSun).big_integer().not_null())
        .col(
            ColumnDef::new(Orders::Status)
                .string_len(STATUS_LEN)
                .not_null(),
        )
        .col(ColumnDef::new(Orders::TxHash).string_len(TX_HASH_LEN).null())
        .col(
            ColumnDef::new(Orders::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Orders::Table).if_exists().to_owned()
}

schema_operation!(CreateTable, up_statement, down_statement);
