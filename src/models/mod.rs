mod category;
mod draft;
mod errors;
#[cfg(test)]
mod tests;
mod theme;
mod transaction;

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use category::{categories_for, is_suggested_category};
pub use draft::{next_transaction_id, TransactionDraft};
pub use errors::ValidationError;
pub use theme::Theme;
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense
}

impl TransactionType {
    /// Gives `amount` the sign it carries when aggregated into a balance.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionType::Income => amount,
            TransactionType::Expense => -amount
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense"
        }
    }
}
