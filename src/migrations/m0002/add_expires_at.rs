use sea_query::{ColumnDef, Table, TableAlterStatement};

use crate::migrations::operation::schema_operation;
use crate::schema::TrxExchangeOrders;

pub struct Operation;

fn up_statement() -> TableAlterStatement {
    Table::alter()
        .table(TrxExchangeOrders::Table)
        .add_column(
            ColumnDef::new(TrxExchangeOrders::ExpiresAt)
                .timestamp_with_time_zone()
                .null(),
        )
        .to_owned()
}

fn down_statement() -> TableAlterStatement {
    Table::alter()
        .table(TrxExchangeOrders::Table)
        .drop_column(TrxExchangeOrders::ExpiresAt)
        .to_owned()
}

schema_operation!(Operation, up_statement, down_statement);
