use crate::entity::{OrderStatus, PremiumOrder, StoreError};
use crate::schema::FAIL_REASON_LEN;
use log::info;
use sqlx::PgPool;

/// Cut `reason` down to what `premium_orders.fail_reason` holds
pub fn truncate_reason(reason: &str) -> String {
    reason.chars().take(FAIL_REASON_LEN as usize).collect()
}

/// Get a specific premium order by ID
pub async fn get_order(pool: &PgPool, order_id: i32) -> Result<Option<PremiumOrder>, StoreError> {
    let order = sqlx::query_as::<_, PremiumOrder>("SELECT * FROM premium_orders WHERE id = $1")
        .bind(order_id)
        .fetch_optional(pool)
        .await?;

    Ok(order)
}

/// Mark a premium order as failed and record why
pub async fn mark_failed(pool: &PgPool, order_id: i32, reason: &str) -> Result<(), StoreError> {
    let reason = truncate_reason(reason);

    let result = sqlx::query(
        "UPDATE premium_orders
         SET status = $1, fail_reason = $2
         WHERE id = $3",
    )
    .bind(OrderStatus::Failed.to_string())
    .bind(&reason)
    .bind(order_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::OrderNotFound(order_id));
    }

    info!("Premium order #{} failed: {}", order_id, reason);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_reasons_are_kept() {
        assert_eq!(truncate_reason("fragment api timeout"), "fragment api timeout");
    }

    #[test]
    fn long_reasons_are_cut_on_char_boundaries() {
        let reason = "ошибка ".repeat(200);
        let truncated = truncate_reason(&reason);

        assert_eq!(truncated.chars().count(), FAIL_REASON_LEN as usize);
        assert!(reason.starts_with(&truncated));
    }
}
