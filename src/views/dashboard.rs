use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionType};
use crate::views::{aggregate, balance, filter_transactions, ChartGrouping, ChartSlice, Period};

/// The user's current filter, search and chart selections.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewQuery {
    pub period: Period,
    pub search: String,
    pub chart_type: TransactionType,
    pub grouping: ChartGrouping
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            period: Period::All,
            search: String::new(),
            chart_type: TransactionType::Expense,
            grouping: ChartGrouping::Category
        }
    }
}

/// Everything derived from one snapshot for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub transactions: Vec<Transaction>,
    pub balance: Decimal,
    pub chart: Vec<ChartSlice>
}

impl DashboardView {
    pub fn compute<Tz: TimeZone>(transactions: &[Transaction], query: &ViewQuery, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display
    {
        let filtered = filter_transactions(transactions, query.period, &query.search, now);
        let balance = balance(&filtered);
        let chart = aggregate(&filtered, query.chart_type, query.grouping, &now.timezone());

        Self {
            transactions: filtered,
            balance,
            chart
        }
    }
}
