use sea_query::{ColumnDef, Expr, Table, TableCreateStatement, TableDropStatement};

use crate::migrations::operation::schema_operation;
use crate::schema::{EnergyOrders, ADDRESS_LEN, STATUS_LEN};

pub struct CreateTable;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(EnergyOrders::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(EnergyOrders::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(EnergyOrders::TelegramId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(EnergyOrders::ReceiveAddress)
                .string_len(ADDRESS_LEN)
                .not_null(),
        )
        .col(
            ColumnDef::new(EnergyOrders::EnergyAmount)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(EnergyOrders::DurationHours)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(EnergyOrders::PriceSun).big_integer().not_null())
        .col(
            ColumnDef::new(EnergyOrders::Status)
                .string_len(STATUS_LEN)
                .not_null(),
        )
        .col(
            ColumnDef::new(EnergyOrders::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop()
        .table(EnergyOrders::Table)
        .if_exists()
        .to_owned()
}

schema_operation!(CreateTable, up_statement, down_statement);
