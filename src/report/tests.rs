use super::{export, render_html, write_csv, ExportError, ReportFormat};
use crate::models::{Theme, Transaction, TransactionType};

use std::fs;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn create_transaction(id: &str, transaction_type: TransactionType, amount: &str, category: &str, description: Option<&str>) -> Result<Transaction> {
    Ok(Transaction {
        id: id.to_string(),
        amount: Decimal::from_str(amount)?,
        date: Utc.with_ymd_and_hms(2026, 10, 19, 15, 30, 0).single().ok_or_else(|| anyhow!("invalid date"))?,
        category: category.to_string(),
        transaction_type,
        description: description.map(str::to_string)
    })
}

fn sample() -> Result<Vec<Transaction>> {
    Ok(vec![
        create_transaction("1", TransactionType::Income, "100", "Salario", Some("Octubre"))?,
        create_transaction("2", TransactionType::Expense, "40", "Comida", None)?,
    ])
}

#[test]
fn test_html_report_summarizes_and_lists_transactions() -> Result<()> {
    let html = render_html(&sample()?, Theme::Light, &Utc);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Reporte Financiero</h1>"));
    assert!(html.contains("Transacciones: 2"));
    assert!(html.contains("+ $60.00"));
    assert!(html.contains("+ $100.00"));
    assert!(html.contains("- $40.00"));
    assert!(html.contains("19/10/2026"));
    assert!(html.contains("Octubre"));
    assert!(html.contains("#6200EE"));

    Ok(())
}

#[test]
fn test_html_report_follows_theme_and_negative_total() -> Result<()> {
    let transactions = vec![create_transaction("1", TransactionType::Expense, "12.5", "Salud", None)?];
    let html = render_html(&transactions, Theme::Dark, &Utc);

    assert!(html.contains("#BB86FC"));
    assert!(html.contains("#121212"));
    assert!(html.contains(".total { font-size: 24px; font-weight: bold; color: #FF5252; }"));
    assert!(html.contains("- $12.50"));

    Ok(())
}

#[test]
fn test_html_report_escapes_user_text() -> Result<()> {
    let transactions = vec![create_transaction("1", TransactionType::Expense, "1", "<script>", Some("a & b"))?];
    let html = render_html(&transactions, Theme::Light, &Utc);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("a &amp; b"));

    Ok(())
}

#[test]
fn test_csv_report_has_header_and_one_row_per_transaction() -> Result<()> {
    let mut buffer = Vec::new();
    write_csv(&sample()?, &mut buffer)?;

    let output = String::from_utf8(buffer)?;
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,date,type,category,amount,description");
    assert_eq!(lines[1], "1,2026-10-19T15:30:00+00:00,income,Salario,100,Octubre");
    assert_eq!(lines[2], "2,2026-10-19T15:30:00+00:00,expense,Comida,40,");

    Ok(())
}

#[test]
fn test_csv_report_of_empty_set_is_header_only() -> Result<()> {
    let mut buffer = Vec::new();
    write_csv(&[], &mut buffer)?;

    assert_eq!(String::from_utf8(buffer)?, "id,date,type,category,amount,description\n");

    Ok(())
}

#[test]
fn test_export_refuses_empty_set() -> Result<()> {
    let directory = tempdir()?;
    let path = directory.path().join("report.html");

    let result = export(&[], ReportFormat::Html, Theme::Light, &Utc, &path);

    assert!(matches!(result, Err(ExportError::Empty)));
    assert!(!path.exists());

    Ok(())
}

#[test]
fn test_export_writes_requested_format() -> Result<()> {
    let directory = tempdir()?;
    let html_path = directory.path().join("report.html");
    let csv_path = directory.path().join("report.csv");

    export(&sample()?, ReportFormat::Html, Theme::Light, &Utc, &html_path)?;
    export(&sample()?, ReportFormat::Csv, Theme::Light, &Utc, &csv_path)?;

    assert!(fs::read_to_string(&html_path)?.contains("Reporte Financiero"));
    assert!(fs::read_to_string(&csv_path)?.starts_with("id,date,type"));

    Ok(())
}

#[test]
fn test_export_reports_unwritable_destination() -> Result<()> {
    let directory = tempdir()?;
    let path = directory.path().join("missing").join("report.html");

    let result = export(&sample()?, ReportFormat::Html, Theme::Light, &Utc, &path);

    assert!(matches!(result, Err(ExportError::Io { .. })));

    Ok(())
}
