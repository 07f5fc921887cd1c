//! Suggested category lists, scoped per transaction kind.
//!
//! These are prompts for the form layer only. The data layer stores whatever
//! category text it is given; nothing validates against these lists.

use crate::domain::TransactionKind;

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Other",
];

pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investments",
    "Business",
    "Gifts",
    "Other",
];

/// Returns the suggested categories for the given kind.
pub fn suggested_categories(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => INCOME_CATEGORIES,
        TransactionKind::Expense => EXPENSE_CATEGORIES,
    }
}
