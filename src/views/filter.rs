use chrono::{Datelike, DateTime, Days, NaiveDate, NaiveTime, TimeZone, Utc};
use clap::ValueEnum;

use crate::models::Transaction;

/// Relative date window, always an inclusive lower bound on the transaction date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Period {
    #[default]
    All,
    /// Since the start of the current calendar day.
    Today,
    /// Since the start of the day seven days before today.
    Week,
    /// Since the first day of the current calendar month.
    Month
}

impl Period {
    /// The earliest instant the period admits, measured in the zone of `now`.
    /// `None` means the period does not filter.
    pub fn lower_bound<Tz: TimeZone>(self, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
        let today = now.date_naive();

        let first_day = match self {
            Period::All => return None,
            Period::Today => today,
            Period::Week => today.checked_sub_days(Days::new(7))?,
            Period::Month => today.with_day(1)?
        };

        Some(start_of_day(first_day, &now.timezone()))
    }
}

fn start_of_day<Tz: TimeZone>(date: NaiveDate, zone: &Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);

    //NOTE: Midnight can fall in a DST gap, in which case the naive time is taken as UTC
    zone.from_local_datetime(&midnight)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

/// Case-insensitive substring match on category or description.
///
/// A blank query matches everything. The query is lowercased as given,
/// surrounding whitespace included.
pub fn matches_search(transaction: &Transaction, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    let needle = query.to_lowercase();

    transaction.category.to_lowercase().contains(&needle)
        || transaction.description.as_deref()
            .is_some_and(|description| description.to_lowercase().contains(&needle))
}

/// Applies the period filter, then the search filter, preserving list order.
pub fn filter_transactions<Tz: TimeZone>(transactions: &[Transaction], period: Period, query: &str, now: &DateTime<Tz>) -> Vec<Transaction> {
    let lower_bound = period.lower_bound(now);

    transactions.iter()
        .filter(|transaction| lower_bound.is_none_or(|bound| transaction.date >= bound))
        .filter(|transaction| matches_search(transaction, query))
        .cloned()
        .collect()
}
