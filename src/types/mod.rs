mod money;

pub use money::{format_amount, format_signed};

pub type TransactionId = String;
pub type Revision = u64;
