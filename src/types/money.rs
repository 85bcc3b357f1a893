use rust_decimal::{Decimal, RoundingStrategy};

const DECIMAL_PLACES: u32 = 2;

/// Formats an unsigned amount with two decimal places, e.g. `$12.50`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount
        .abs()
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.width$}", rounded, width = DECIMAL_PLACES as usize)
}

/// Formats a signed amount, always carrying the sign, e.g. `+$60.00` or `-$40.00`.
pub fn format_signed(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "+" };
    format!("{}{}", sign, format_amount(amount))
}
