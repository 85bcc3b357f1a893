use std::collections::HashMap;
use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use clap::ValueEnum;
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionType};

const EXPENSE_PALETTE: [&str; 7] = ["#FF5252", "#FF6384", "#FF9F40", "#FFCD56", "#FF8A80", "#D32F2F", "#E64A19"];
const INCOME_PALETTE: [&str; 7] = ["#4CAF50", "#81C784", "#36A2EB", "#4BC0C0", "#9966FF", "#2E7D32", "#0288D1"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum ChartGrouping {
    #[default]
    Category,
    Day
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSlice {
    pub label: String,
    pub value: Decimal,
    pub color: &'static str
}

pub fn palette_for(transaction_type: TransactionType) -> &'static [&'static str] {
    match transaction_type {
        TransactionType::Expense => &EXPENSE_PALETTE,
        TransactionType::Income => &INCOME_PALETTE
    }
}

/// Calendar day of `date` in `zone`, formatted `d/m/yyyy` without padding.
pub fn day_label<Tz: TimeZone>(date: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: Display
{
    date.with_timezone(zone).format("%-d/%-m/%Y").to_string()
}

/// Sums the amounts of one transaction type per category or per day.
///
/// Groups keep the order in which their key first appears in `transactions`
/// and take their color from the type's palette by that position, so colors
/// shift if the source list is reordered.
pub fn aggregate<Tz: TimeZone>(transactions: &[Transaction], transaction_type: TransactionType, grouping: ChartGrouping, zone: &Tz) -> Vec<ChartSlice>
where
    Tz::Offset: Display
{
    let mut positions = HashMap::<String, usize>::new();
    let mut groups = Vec::<(String, Decimal)>::new();

    for transaction in transactions.iter().filter(|transaction| transaction.transaction_type == transaction_type) {
        let key = match grouping {
            ChartGrouping::Category => transaction.category.clone(),
            ChartGrouping::Day => day_label(&transaction.date, zone)
        };

        match positions.get(&key) {
            Some(&index) => groups[index].1 += transaction.amount,
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, transaction.amount));
            }
        }
    }

    let palette = palette_for(transaction_type);

    groups.into_iter()
        .enumerate()
        .map(|(index, (label, value))| ChartSlice { label, value, color: palette[index % palette.len()] })
        .collect()
}
