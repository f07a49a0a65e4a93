//! Daily dashboard figures, recomputed from the order list on every request.

use crate::model::{Order, OrderStatus};
use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub total_orders: usize,
    pub pending_orders: usize,
    pub completed_orders: usize,
    /// Sum of order totals, cancelled orders included.
    pub revenue: Decimal,
}

/// The day's order totals add up to more than a `Decimal` holds.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Revenue for {day} is out of range")]
pub struct RevenueOverflow {
    pub day: NaiveDate,
}

/// Summarize the orders created on `as_of`'s local calendar day, up to `as_of`.
pub fn summarize<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    as_of: DateTime<Local>,
) -> Result<DailyStats, RevenueOverflow> {
    let day = as_of.date_naive();
    let mut stats = DailyStats {
        total_orders: 0,
        pending_orders: 0,
        completed_orders: 0,
        revenue: Decimal::ZERO,
    };

    for order in orders
        .into_iter()
        .filter(|o| o.created_at.date_naive() == day && o.created_at <= as_of)
    {
        stats.total_orders += 1;
        stats.revenue = stats
            .revenue
            .checked_add(order.total)
            .ok_or(RevenueOverflow { day })?;
        match order.status {
            OrderStatus::Pending => stats.pending_orders += 1,
            OrderStatus::Completed => stats.completed_orders += 1,
            _ => {}
        }
    }
    Ok(stats)
}
