//! Domain model for income and expense records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single income or expense record.
///
/// The persisted JSON shape keeps the historical field name `type` for the
/// kind discriminator, so existing data files remain readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Builds a record from a draft, assigning a fresh id.
    pub fn new(draft: TransactionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: draft.description,
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category,
            date: draft.date,
        }
    }

    /// Applies the supplied fields in place. The id never changes.
    pub fn apply(&mut self, patch: TransactionPatch) {
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }
}

/// All fields of a transaction except the id; input to `TransactionStore::add`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
}

impl TransactionDraft {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            date,
        }
    }
}

/// Partial update for an existing transaction; `None` fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Closed enumeration of transaction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn wire_format_matches_legacy_payload() {
        let txn = Transaction::new(TransactionDraft::new(
            "Grocery Shopping",
            150.0,
            TransactionKind::Expense,
            "Food & Dining",
            date(2025, 2, 2),
        ));
        let json = serde_json::to_value(&txn).expect("serializes");
        assert_eq!(json["type"], "expense");
        assert_eq!(json["date"], "2025-02-02");
        assert_eq!(json["amount"], 150.0);
        assert_eq!(json["description"], "Grocery Shopping");
    }

    #[test]
    fn apply_patch_touches_only_supplied_fields() {
        let mut txn = Transaction::new(TransactionDraft::new(
            "Gas Station",
            45.0,
            TransactionKind::Expense,
            "Transportation",
            date(2025, 2, 5),
        ));
        let before = txn.clone();
        txn.apply(TransactionPatch {
            amount: Some(52.5),
            ..Default::default()
        });
        assert_eq!(txn.amount, 52.5);
        assert_eq!(txn.id, before.id);
        assert_eq!(txn.description, before.description);
        assert_eq!(txn.kind, before.kind);
        assert_eq!(txn.category, before.category);
        assert_eq!(txn.date, before.date);
    }

    #[test]
    fn kind_round_trips_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Income).expect("serializes");
        assert_eq!(json, "\"income\"");
        let parsed: TransactionKind = serde_json::from_str("\"expense\"").expect("parses");
        assert_eq!(parsed, TransactionKind::Expense);
    }
}
