use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TransactionType;
use crate::types::TransactionId;

/// A single recorded income or expense event.
///
/// The serialized shape is the one kept in the transactions storage slot:
/// `amount` is a JSON number carrying every digit of the decimal, `date` an
/// ISO-8601 string and `type` either `income` or `expense`. Nothing here
/// enforces a positive amount or a non-empty category; that only happens
/// when a [`TransactionDraft`] is validated.
///
/// [`TransactionDraft`]: crate::models::TransactionDraft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Caller-assigned identifier, unique within the list by convention only.
    pub id: TransactionId,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    /// Free-form label, usually one of the suggested categories.
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>
}

impl Transaction {
    /// `+amount` for income, `-amount` for expenses.
    pub fn signed_amount(&self) -> Decimal {
        self.transaction_type.signed(self.amount)
    }
}
