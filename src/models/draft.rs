use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionType, ValidationError};
use crate::types::TransactionId;

//NOTE: Balances are summed unchecked, amounts must stay far below Decimal::MAX
const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000_000;

/// Raw user input for a transaction, before it is validated into a [`Transaction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub transaction_type: TransactionType,
    pub amount: String,
    pub category: String,
    pub description: String,
    pub date: DateTime<Utc>
}

impl TransactionDraft {
    /// An empty draft dated now.
    pub fn new(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type,
            amount: String::new(),
            category: String::new(),
            description: String::new(),
            date: Utc::now()
        }
    }

    /// Prefills a draft with the fields of an existing transaction for editing.
    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            transaction_type: transaction.transaction_type,
            amount: transaction.amount.to_string(),
            category: transaction.category.clone(),
            description: transaction.description.clone().unwrap_or_default(),
            date: transaction.date
        }
    }

    /// Turns the draft into a transaction carrying `id`.
    ///
    /// # Errors
    /// Returns `ValidationError` if:
    /// - The amount or the category is empty.
    /// - The amount is not a number or is not greater than zero.
    /// - The amount is above `MAX_AMOUNT_UNITS`.
    pub fn validate(self, id: TransactionId) -> Result<Transaction, ValidationError> {
        let amount = self.amount.trim();
        let category = self.category.trim();

        if amount.is_empty() || category.is_empty() {
            return Err(ValidationError::MissingFields)
        }

        let parsed = Decimal::from_str(amount)
            .or_else(|_| Decimal::from_scientific(amount))
            .map_err(|_| ValidationError::invalid_amount(amount))?;

        if parsed <= Decimal::ZERO {
            return Err(ValidationError::invalid_amount(amount))
        }

        let limit = Decimal::from(MAX_AMOUNT_UNITS);
        if parsed > limit {
            return Err(ValidationError::amount_too_large(amount, &limit.to_string()))
        }

        let description = self.description.trim();

        Ok(Transaction {
            id,
            amount: parsed,
            date: self.date,
            category: category.to_string(),
            transaction_type: self.transaction_type,
            description: (!description.is_empty()).then(|| description.to_string())
        })
    }
}

/// Timestamp-derived identifier: milliseconds since the Unix epoch, bumped
/// past any value `is_taken` reports as already in use.
pub fn next_transaction_id(is_taken: impl Fn(&str) -> bool) -> TransactionId {
    let mut millis = Utc::now().timestamp_millis();

    loop {
        let id = millis.to_string();

        if !is_taken(&id) {
            return id;
        }

        millis += 1;
    }
}
