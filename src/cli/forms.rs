//! Add/edit form for transactions.
//!
//! The form itself is a plain state machine so the validation and
//! kind-toggle rules are testable without a terminal; the interactive
//! runner wraps it with `dialoguer` prompts.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use uuid::Uuid;

use crate::{
    cli::core::CommandError,
    cli::output,
    domain::{suggested_categories, TransactionDraft, TransactionKind, TransactionPatch},
    store::TransactionStore,
};

/// Whether a submission creates a new record or rewrites an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing { id: Uuid },
}

/// A valid submission, ready to hand to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum FormSubmission {
    Create(TransactionDraft),
    Update(Uuid, TransactionPatch),
}

pub struct TransactionForm {
    mode: FormMode,
    pub kind: TransactionKind,
    pub description: String,
    /// Raw text, parsed on submit; invalid text just blocks submission.
    pub amount: String,
    pub category: String,
    pub date: NaiveDate,
}

impl TransactionForm {
    /// Blank form. The kind defaults to expense.
    pub fn create(today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Creating,
            kind: TransactionKind::Expense,
            description: String::new(),
            amount: String::new(),
            category: String::new(),
            date: today,
        }
    }

    /// Form pre-populated from an existing record. An unknown id degrades to
    /// a blank create-mode form rather than failing.
    pub fn edit(store: &TransactionStore, id: Uuid, today: NaiveDate) -> Self {
        match store.get(id) {
            Some(transaction) => Self {
                mode: FormMode::Editing { id },
                kind: transaction.kind,
                description: transaction.description.clone(),
                amount: format_amount(transaction.amount),
                category: transaction.category.clone(),
                date: transaction.date,
            },
            None => Self::create(today),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Switches the kind. Categories are scoped per kind, so a real switch
    /// clears the selected category.
    pub fn set_kind(&mut self, kind: TransactionKind) {
        if self.kind != kind {
            self.kind = kind;
            self.category.clear();
        }
    }

    /// Validates and produces a submission. Returns `None` when any required
    /// field is empty or the amount does not parse to a positive number; the
    /// form state is left untouched either way.
    pub fn submit(&self) -> Option<FormSubmission> {
        if self.description.trim().is_empty() || self.category.trim().is_empty() {
            return None;
        }
        let amount: f64 = self.amount.trim().parse().ok()?;
        if amount <= 0.0 {
            return None;
        }
        let submission = match self.mode {
            FormMode::Creating => FormSubmission::Create(TransactionDraft::new(
                self.description.trim().to_string(),
                amount,
                self.kind,
                self.category.trim().to_string(),
                self.date,
            )),
            FormMode::Editing { id } => FormSubmission::Update(
                id,
                TransactionPatch {
                    description: Some(self.description.trim().to_string()),
                    amount: Some(amount),
                    kind: Some(self.kind),
                    category: Some(self.category.trim().to_string()),
                    date: Some(self.date),
                },
            ),
        };
        Some(submission)
    }
}

fn format_amount(amount: f64) -> String {
    // keep whole numbers clean when pre-filling the field
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount}")
    }
}

const CUSTOM_CATEGORY: &str = "(custom)";

/// Prompts for every field, looping until the form submits cleanly.
pub fn run_interactive(form: &mut TransactionForm) -> Result<FormSubmission, CommandError> {
    let theme = ColorfulTheme::default();
    loop {
        let kinds = [TransactionKind::Expense, TransactionKind::Income];
        let labels = ["Expense", "Income"];
        let default_kind = kinds.iter().position(|k| *k == form.kind).unwrap_or(0);
        let picked = Select::with_theme(&theme)
            .with_prompt("Transaction type")
            .items(&labels)
            .default(default_kind)
            .interact()?;
        form.set_kind(kinds[picked]);

        form.description = Input::with_theme(&theme)
            .with_prompt("Description")
            .with_initial_text(form.description.clone())
            .allow_empty(true)
            .interact_text()?;

        form.amount = Input::with_theme(&theme)
            .with_prompt("Amount")
            .with_initial_text(form.amount.clone())
            .allow_empty(true)
            .interact_text()?;

        let suggestions = suggested_categories(form.kind);
        let mut items: Vec<&str> = suggestions.to_vec();
        items.push(CUSTOM_CATEGORY);
        let default_category = suggestions
            .iter()
            .position(|c| *c == form.category)
            .unwrap_or(0);
        let choice = Select::with_theme(&theme)
            .with_prompt("Category")
            .items(&items)
            .default(default_category)
            .interact()?;
        form.category = if choice == suggestions.len() {
            Input::with_theme(&theme)
                .with_prompt("Category name")
                .allow_empty(true)
                .interact_text()?
        } else {
            suggestions[choice].to_string()
        };

        let date_text: String = Input::with_theme(&theme)
            .with_prompt("Date (YYYY-MM-DD)")
            .with_initial_text(form.date.to_string())
            .interact_text()?;
        match NaiveDate::parse_from_str(date_text.trim(), "%Y-%m-%d") {
            Ok(date) => form.date = date,
            Err(_) => {
                output::warning("Invalid date; use YYYY-MM-DD.");
                continue;
            }
        }

        match form.submit() {
            Some(submission) => return Ok(submission),
            None => output::warning("Description, amount, and category are all required."),
        }
    }
}
