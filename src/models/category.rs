use crate::models::TransactionType;

const EXPENSE_CATEGORIES: [&str; 8] = [
    "Comida",
    "Transporte",
    "Servicios",
    "Entretenimiento",
    "Salud",
    "Educación",
    "Compras",
    "Otros"
];

const INCOME_CATEGORIES: [&str; 5] = [
    "Salario",
    "Freelance",
    "Inversiones",
    "Ventas",
    "Otros"
];

/// The suggested categories for a transaction type. The list is advisory,
/// any label is accepted when recording a transaction.
pub fn categories_for(transaction_type: TransactionType) -> &'static [&'static str] {
    match transaction_type {
        TransactionType::Expense => &EXPENSE_CATEGORIES,
        TransactionType::Income => &INCOME_CATEGORIES
    }
}

pub fn is_suggested_category(transaction_type: TransactionType, category: &str) -> bool {
    categories_for(transaction_type).contains(&category)
}
