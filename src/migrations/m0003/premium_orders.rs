use sea_query::{ColumnDef, Table, TableAlterStatement};

use crate::migrations::operation::schema_operation;
use crate::schema::{PremiumOrders, FAIL_REASON_LEN};

pub struct AddFailReason;

fn up_statement() -> TableAlterStatement {
    Table::alter()
        .table(PremiumOrders::Table)
        .add_column(
            ColumnDef::new(PremiumOrders::FailReason)
                .string_len(FAIL_REASON_LEN)
                .null(),
        )
        .to_owned()
}

fn down_statement() -> TableAlterStatement {
    Table::alter()
        .table(PremiumOrders::Table)
        .drop_column(PremiumOrders::FailReason)
        .to_owned()
}

schema_operation!(AddFailReason, up_statement, down_statement);
