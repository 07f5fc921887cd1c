//! Aggregation over the transaction collection.
//!
//! Pure functions, no side effects. Every call recomputes from scratch;
//! the collection is personal-scale, so O(n) on demand is the design.

use std::cmp::Ordering;

use crate::domain::{Transaction, TransactionKind};

/// Sentinel returned when no expense categories exist.
pub const NO_CATEGORY: &str = "N/A";

/// Headline metrics derived from the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    /// Percentage of income retained after expenses. Zero when there is no
    /// income; negative when overspending. Never clamped.
    pub savings_rate: f64,
}

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Sum of `amount` over records of the given kind.
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    let total_income = total_by_kind(transactions, TransactionKind::Income);
    let total_expenses = total_by_kind(transactions, TransactionKind::Expense);
    let balance = total_income - total_expenses;
    let savings_rate = if total_income > 0.0 {
        (total_income - total_expenses) / total_income * 100.0
    } else {
        0.0
    };
    Summary {
        total_income,
        total_expenses,
        balance,
        savings_rate,
    }
}

/// Expense totals grouped by category, sorted by amount descending.
/// Ties keep first-encounter order.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for transaction in transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
    {
        match totals
            .iter_mut()
            .find(|entry| entry.category == transaction.category)
        {
            Some(entry) => entry.amount += transaction.amount,
            None => totals.push(CategoryTotal {
                category: transaction.category.clone(),
                amount: transaction.amount,
            }),
        }
    }
    // sort_by is stable, so equal amounts keep encounter order
    totals.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    totals
}

/// Category of the largest expense group, or [`NO_CATEGORY`] when none exist.
pub fn highest_spending_category(breakdown: &[CategoryTotal]) -> &str {
    breakdown
        .first()
        .map(|entry| entry.category.as_str())
        .unwrap_or(NO_CATEGORY)
}
