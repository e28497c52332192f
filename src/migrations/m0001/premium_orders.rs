use sea_query::{ColumnDef, Expr, Table, TableCreateStatement, TableDropStatement};

use crate::migrations::operation::schema_operation;
use crate::schema::{PremiumOrders, STATUS_LEN};

pub struct CreateTable;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(PremiumOrders::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(PremiumOrders::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(PremiumOrders::TelegramId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(PremiumOrders::RecipientUsername)
                .string_len(64)
                .not_null(),
        )
        .col(ColumnDef::new(PremiumOrders::Months).integer().not_null())
        .col(
            ColumnDef::new(PremiumOrders::Status)
                .string_len(STATUS_LEN)
                .not_null(),
        )
        .col(
            ColumnDef::new(PremiumOrders::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop()
        .table(PremiumOrders::Table)
        .if_exists()
        .to_owned()
}

schema_operation!(CreateTable, up_statement, down_statement);
