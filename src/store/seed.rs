//! Fixed demo dataset used on first run and when stored data is unreadable.

use chrono::NaiveDate;

use crate::domain::{Transaction, TransactionDraft, TransactionKind};

/// Builds the demo transactions. Ids are freshly assigned on every call.
pub fn demo_transactions() -> Vec<Transaction> {
    use TransactionKind::{Expense, Income};

    let rows: &[(&str, f64, TransactionKind, &str, (i32, u32, u32))] = &[
        ("Monthly Salary", 5000.0, Income, "Salary", (2025, 2, 1)),
        ("Grocery Shopping", 150.0, Expense, "Food & Dining", (2025, 2, 2)),
        ("Electric Bill", 85.0, Expense, "Bills & Utilities", (2025, 2, 3)),
        ("Freelance Project", 800.0, Income, "Freelance", (2025, 2, 4)),
        ("Netflix Subscription", 15.0, Expense, "Entertainment", (2025, 2, 5)),
        ("Gas Station", 45.0, Expense, "Transportation", (2025, 2, 5)),
        ("Online Course", 99.0, Expense, "Education", (2025, 2, 6)),
        ("Restaurant Dinner", 65.0, Expense, "Food & Dining", (2025, 2, 7)),
    ];

    rows.iter()
        .map(|(description, amount, kind, category, (y, m, d))| {
            Transaction::new(TransactionDraft::new(
                *description,
                *amount,
                *kind,
                *category,
                NaiveDate::from_ymd_opt(*y, *m, *d).expect("valid seed date"),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_dataset_has_unique_ids() {
        let transactions = demo_transactions();
        assert_eq!(transactions.len(), 8);
        let ids: HashSet<_> = transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), transactions.len());
    }
}
