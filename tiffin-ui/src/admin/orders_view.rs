//! Completed orders view

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use shared::models::Order;

/// Date-range presets for the completed orders table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    Today,
    Yesterday,
    Week,
    Month,
    All,
}

impl DateFilter {
    /// Half-open `[start, end)` bounds relative to `now`; `None` means
    /// unbounded on that side. The week starts on Sunday.
    pub fn range(self, now: DateTime<Utc>) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        let today = now.date_naive();
        let start_of = |date: NaiveDate| {
            date.and_hms_opt(0, 0, 0)
                .expect("midnight is always valid")
                .and_utc()
        };

        match self {
            Self::Today => (Some(start_of(today)), None),
            Self::Yesterday => (
                Some(start_of(today - Duration::days(1))),
                Some(start_of(today)),
            ),
            Self::Week => {
                let days_into_week = today.weekday().num_days_from_sunday() as i64;
                (Some(start_of(today - Duration::days(days_into_week))), None)
            }
            Self::Month => {
                let first = today.with_day(1).expect("day 1 is always valid");
                (Some(start_of(first)), None)
            }
            Self::All => (None, None),
        }
    }

    pub fn contains(self, now: DateTime<Utc>, instant: DateTime<Utc>) -> bool {
        let (start, end) = self.range(now);
        start.is_none_or(|s| instant >= s) && end.is_none_or(|e| instant < e)
    }
}

/// Completed orders table state: the fetched order list (newest first)
/// plus the active date preset
#[derive(Debug, Default)]
pub struct CompletedOrdersView {
    orders: Vec<Order>,
    pub filter: DateFilter,
}

impl CompletedOrdersView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the order list with a fresh snapshot (already newest first)
    pub fn set_orders(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Completed-status orders within the active date range, in list order
    pub fn filtered(&self, now: DateTime<Utc>) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| order.is_completed())
            .filter(|order| self.filter.contains(now, order.created_at))
            .collect()
    }
}
