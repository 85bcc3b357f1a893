use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing data: please enter an amount and a category")]
    MissingFields,
    #[error("Invalid amount [{amount}]: the amount must be greater than 0")]
    InvalidAmount {
        amount: String
    },
    #[error("Invalid amount [{amount}]: the amount must not exceed {limit}")]
    AmountTooLarge {
        amount: String,
        limit: String
    }
}

impl ValidationError {
    pub fn invalid_amount(amount: &str) -> Self {
        Self::InvalidAmount { amount: amount.to_string() }
    }

    pub fn amount_too_large(amount: &str, limit: &str) -> Self {
        Self::AmountTooLarge { amount: amount.to_string(), limit: limit.to_string() }
    }
}
