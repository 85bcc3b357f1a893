mod cache;
mod chart;
mod dashboard;
mod filter;

use rust_decimal::Decimal;

use crate::models::Transaction;

pub use cache::ViewCache;
pub use chart::{aggregate, day_label, ChartGrouping, ChartSlice};
pub use dashboard::{DashboardView, ViewQuery};
pub use filter::{filter_transactions, Period};

/// Net signed sum: income adds, expenses subtract. Zero for an empty set.
pub fn balance(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(Transaction::signed_amount).sum()
}
