use std::fmt::Display;

use chrono::TimeZone;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use rust_decimal::Decimal;

use crate::models::{Theme, Transaction, TransactionType};
use crate::types::format_amount;
use crate::views::{balance, day_label};

const TITLE: &str = "Reporte Financiero";
const POSITIVE_COLOR: &str = "#4CAF50";
const NEGATIVE_COLOR: &str = "#FF5252";

struct ReportColors {
    background: &'static str,
    text: &'static str,
    card: &'static str,
    heading: &'static str,
    border: &'static str,
    header_background: &'static str,
    header_text: &'static str
}

impl ReportColors {
    fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            Self {
                background: "#121212",
                text: "#E0E0E0",
                card: "#1E1E1E",
                heading: "#BB86FC",
                border: "#333",
                header_background: "#333",
                header_text: "white"
            }
        } else {
            Self {
                background: "#FFFFFF",
                text: "#333333",
                card: "#F8F8F8",
                heading: "#6200EE",
                border: "#ddd",
                header_background: "#eee",
                header_text: "#555"
            }
        }
    }
}

/// Renders the report as a standalone HTML document.
pub fn render_html<Tz: TimeZone>(transactions: &[Transaction], theme: Theme, zone: &Tz) -> String
where
    Tz::Offset: Display
{
    let colors = ReportColors::for_theme(theme);
    let total = balance(transactions);
    let row_style = format!("background-color: {}; color: {};", colors.card, colors.text);

    let document = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, minimum-scale=1.0, user-scalable=no";
                title { (TITLE) }
                style { (stylesheet(&colors, total)) }
            }
            body {
                h1 { (TITLE) }
                div class="summary" {
                    p { "Transacciones: " (transactions.len()) }
                    p { "Balance Total: " span class="total" { (signed_label(total)) } }
                }
                table {
                    thead {
                        tr {
                            th { "Fecha" }
                            th { "Categoría" }
                            th { "Nota" }
                            th style="text-align: right;" { "Monto" }
                        }
                    }
                    tbody {
                        @for transaction in transactions {
                            tr style=(row_style) {
                                td { (day_label(&transaction.date, zone)) }
                                td { (transaction.category) }
                                td { (transaction.description.as_deref().unwrap_or_default()) }
                                td style=(amount_style(transaction.transaction_type)) {
                                    (signed_label(transaction.signed_amount()))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    document.into_string()
}

fn signed_label(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "+" };
    format!("{} {}", sign, format_amount(amount))
}

fn amount_style(transaction_type: TransactionType) -> String {
    let color = match transaction_type {
        TransactionType::Income => POSITIVE_COLOR,
        TransactionType::Expense => NEGATIVE_COLOR
    };

    format!("color: {color}; font-weight: bold; text-align: right;")
}

fn stylesheet(colors: &ReportColors, total: Decimal) -> Markup {
    let total_color = if total >= Decimal::ZERO { POSITIVE_COLOR } else { NEGATIVE_COLOR };

    PreEscaped(format!(
        "body {{ font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif; padding: 40px; background-color: {background}; }}
        h1 {{ color: {heading}; text-align: center; }}
        .summary {{ margin-top: 20px; margin-bottom: 40px; padding: 20px; border-radius: 10px; background-color: {card}; text-align: center; color: {text}; }}
        .total {{ font-size: 24px; font-weight: bold; color: {total_color}; }}
        table {{ width: 100%; border-collapse: collapse; }}
        th, td {{ padding: 12px; border-bottom: 1px solid {border}; text-align: left; }}
        th {{ background-color: {header_background}; color: {header_text}; }}",
        background = colors.background,
        heading = colors.heading,
        card = colors.card,
        text = colors.text,
        border = colors.border,
        header_background = colors.header_background,
        header_text = colors.header_text
    ))
}
