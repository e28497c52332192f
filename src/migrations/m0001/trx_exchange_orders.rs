use sea_query::{ColumnDef, Expr, Table, TableCreateStatement, TableDropStatement};

use crate::migrations::operation::schema_operation;
use crate::schema::{TrxExchangeOrders, ADDRESS_LEN, STATUS_LEN};

pub struct CreateTable;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(TrxExchangeOrders::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(TrxExchangeOrders::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(TrxExchangeOrders::TelegramId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(TrxExchangeOrders::ReceiveAddress)
                .string_len(ADDRESS_LEN)
                .not_null(),
        )
        .col(
            ColumnDef::new(TrxExchangeOrders::UsdtAmount)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(TrxExchangeOrders::TrxAmount)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(TrxExchangeOrders::Status)
                .string_len(STATUS_LEN)
                .not_null(),
        )
        // Nullable: rows imported from the first bot version have no creation time
        .col(
            ColumnDef::new(TrxExchangeOrders::CreatedAt)
                .timestamp_with_time_zone()
                .null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop()
        .table(TrxExchangeOrders::Table)
        .if_exists()
        .to_owned()
}

schema_operation!(CreateTable, up_statement, down_statement);
