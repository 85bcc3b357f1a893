use std::io::Write;

use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TransactionType};

const HEADER: [&str; 6] = ["id", "date", "type", "category", "amount", "description"];

#[derive(Serialize)]
struct ReportRow<'a> {
    id: &'a str,
    date: String,
    transaction_type: TransactionType,
    category: &'a str,
    amount: Decimal,
    description: &'a str
}

impl<'a> From<&'a Transaction> for ReportRow<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        Self {
            id: &transaction.id,
            date: transaction.date.to_rfc3339(),
            transaction_type: transaction.transaction_type,
            category: &transaction.category,
            amount: transaction.amount,
            description: transaction.description.as_deref().unwrap_or_default()
        }
    }
}

/// Writes the header followed by one row per transaction, even when there are none.
pub fn write_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(HEADER)?;

    for transaction in transactions {
        writer.serialize(ReportRow::from(transaction))?;
    }

    writer.flush()?;

    Ok(())
}
