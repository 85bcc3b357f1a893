use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::Transaction;
use crate::types::TransactionId;

/// A change to the transaction list.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Appends, or replaces the element with the same id if there is one.
    Create(Transaction),
    /// Replaces the element with the same id; nothing happens if there is none.
    Update(Transaction),
    /// Drops every element with the id.
    Delete(TransactionId)
}

impl Mutation {
    /// Produces the next list from a copy of `current`, leaving `current` untouched.
    pub fn apply(&self, current: &[Transaction]) -> Vec<Transaction> {
        match self {
            Mutation::Create(transaction) if !contains(current, &transaction.id) => {
                let mut next = current.to_vec();
                next.push(transaction.clone());
                next
            }
            Mutation::Create(transaction) | Mutation::Update(transaction) => replace(current, transaction),
            Mutation::Delete(id) => current.iter()
                .filter(|existing| existing.id != *id)
                .cloned()
                .collect()
        }
    }
}

impl Display for Mutation {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::Create(transaction) => write!(formatter, "Create [{}]", transaction.id),
            Mutation::Update(transaction) => write!(formatter, "Update [{}]", transaction.id),
            Mutation::Delete(id) => write!(formatter, "Delete [{}]", id)
        }
    }
}

fn contains(transactions: &[Transaction], id: &str) -> bool {
    transactions.iter().any(|existing| existing.id == id)
}

fn replace(current: &[Transaction], transaction: &Transaction) -> Vec<Transaction> {
    current.iter()
        .map(|existing| if existing.id == transaction.id { transaction.clone() } else { existing.clone() })
        .collect()
}
