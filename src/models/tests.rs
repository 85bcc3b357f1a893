use super::{categories_for, is_suggested_category, next_transaction_id, Theme, Transaction, TransactionDraft, TransactionType, ValidationError};

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

fn create_draft(transaction_type: TransactionType, amount: &str, category: &str, description: &str) -> Result<TransactionDraft> {
    Ok(TransactionDraft {
        transaction_type,
        amount: amount.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        date: Utc.with_ymd_and_hms(2026, 10, 19, 15, 30, 0).single().ok_or_else(|| anyhow!("invalid date"))?
    })
}

#[test]
fn test_transaction_deserializes_from_stored_shape() -> Result<()> {
    let json = r#"{"id":"1760887800000","amount":12.5,"date":"2026-10-19T15:30:00.000Z","category":"Comida","type":"expense","description":"Tacos"}"#;
    let transaction: Transaction = serde_json::from_str(json)?;

    assert_eq!(transaction.id, "1760887800000");
    assert_eq!(transaction.amount, Decimal::from_str("12.5")?);
    assert_eq!(transaction.category, "Comida");
    assert_eq!(transaction.transaction_type, TransactionType::Expense);
    assert_eq!(transaction.description.as_deref(), Some("Tacos"));
    assert_eq!(transaction.signed_amount(), Decimal::from_str("-12.5")?);

    Ok(())
}

#[test]
fn test_transaction_without_description_is_accepted() -> Result<()> {
    let json = r#"{"id":"1","amount":100,"date":"2026-10-19T15:30:00Z","category":"Salario","type":"income"}"#;
    let transaction: Transaction = serde_json::from_str(json)?;

    assert!(transaction.description.is_none());
    assert_eq!(transaction.signed_amount(), Decimal::from(100));

    Ok(())
}

#[test]
fn test_transaction_list_survives_serialization() -> Result<()> {
    let transactions = vec![
        create_draft(TransactionType::Income, "100", "Salario", "Octubre")?.validate("1".to_string())?,
        create_draft(TransactionType::Expense, "40.25", "Comida", "")?.validate("2".to_string())?,
        create_draft(TransactionType::Expense, "0.12345678901234567890", "Otros", "")?.validate("3".to_string())?,
        create_draft(TransactionType::Income, "999999999999999.99", "Ventas", "")?.validate("4".to_string())?,
    ];

    let json = serde_json::to_string(&transactions)?;
    let restored: Vec<Transaction> = serde_json::from_str(&json)?;

    assert_eq!(restored, transactions);
    assert!(json.contains(r#""type":"income""#));
    assert!(json.contains(r#""amount":40.25"#));
    assert!(json.contains(r#""amount":0.12345678901234567890"#));
    assert!(json.contains(r#""amount":999999999999999.99"#));

    for (restored, original) in restored.iter().zip(&transactions) {
        assert_eq!(restored.amount.to_string(), original.amount.to_string());
    }
    assert!(!json.contains("description\":null"));

    Ok(())
}

#[test]
fn test_valid_draft_becomes_transaction() -> Result<()> {
    let transaction = create_draft(TransactionType::Expense, " 10.5 ", " Comida ", "  ")?.validate("42".to_string())?;

    assert_eq!(transaction.id, "42");
    assert_eq!(transaction.amount, Decimal::from_str("10.5")?);
    assert_eq!(transaction.category, "Comida");
    assert!(transaction.description.is_none());

    Ok(())
}

#[test]
fn test_draft_without_amount_or_category_is_rejected() -> Result<()> {
    let missing_amount = create_draft(TransactionType::Expense, "", "Comida", "")?.validate("1".to_string());
    let missing_category = create_draft(TransactionType::Expense, "10", "  ", "")?.validate("1".to_string());

    assert_eq!(missing_amount, Err(ValidationError::MissingFields));
    assert_eq!(missing_category, Err(ValidationError::MissingFields));

    Ok(())
}

#[test]
fn test_draft_with_non_positive_or_malformed_amount_is_rejected() -> Result<()> {
    for amount in ["0", "-5", "abc", "1.2.3"] {
        let result = create_draft(TransactionType::Income, amount, "Salario", "")?.validate("1".to_string());

        assert!(matches!(result, Err(ValidationError::InvalidAmount { .. })), "amount [{amount}] should be rejected");
    }

    Ok(())
}

#[test]
fn test_draft_with_oversized_amount_is_rejected() -> Result<()> {
    let at_limit = create_draft(TransactionType::Income, "1000000000000000", "Ventas", "")?.validate("1".to_string());
    let above_limit = create_draft(TransactionType::Income, "1000000000000000.01", "Ventas", "")?.validate("1".to_string());
    let near_max = create_draft(TransactionType::Expense, &Decimal::MAX.to_string(), "Otros", "")?.validate("1".to_string());

    assert!(at_limit.is_ok());
    assert!(matches!(above_limit, Err(ValidationError::AmountTooLarge { .. })));
    assert!(matches!(near_max, Err(ValidationError::AmountTooLarge { .. })));

    Ok(())
}

#[test]
fn test_draft_from_existing_transaction_round_trips() -> Result<()> {
    let original = create_draft(TransactionType::Income, "250", "Freelance", "Logo")?.validate("7".to_string())?;
    let edited = TransactionDraft::from_transaction(&original).validate(original.id.clone())?;

    assert_eq!(edited, original);

    Ok(())
}

#[test]
fn test_theme_parses_stored_values_and_toggles() {
    assert_eq!(Theme::from_stored("dark"), Theme::Dark);
    assert_eq!(Theme::from_stored("light"), Theme::Light);
    assert_eq!(Theme::from_stored("DARK"), Theme::Light);
    assert_eq!(Theme::default(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().to_string(), "light");
}

#[test]
fn test_suggested_categories_are_advisory_per_type() {
    assert_eq!(categories_for(TransactionType::Expense).len(), 8);
    assert_eq!(categories_for(TransactionType::Income).len(), 5);
    assert!(is_suggested_category(TransactionType::Income, "Salario"));
    assert!(!is_suggested_category(TransactionType::Expense, "Salario"));
    assert!(is_suggested_category(TransactionType::Expense, "Otros"));
}

#[test]
fn test_generated_ids_skip_identifiers_in_use() {
    let taken = next_transaction_id(|_| false);
    let fresh = next_transaction_id(|id| id == taken);

    assert!(taken.parse::<i64>().is_ok());
    assert_ne!(taken, fresh);
}
