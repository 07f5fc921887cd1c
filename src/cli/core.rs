//! Shared CLI state and parsing helpers.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::{
    cli::commands::{all_definitions, CommandRegistry},
    cli::output,
    domain::{Transaction, TransactionKind},
    errors::SpendbookError,
    store::TransactionStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<LoopControl, CommandError>;

/// Failure of a single command; reported, never fatal to the shell.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error(transparent)]
    Core(#[from] SpendbookError),
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl From<dialoguer::Error> for CommandError {
    fn from(err: dialoguer::Error) -> Self {
        CommandError::Prompt(err.to_string())
    }
}

/// Fatal shell error.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] SpendbookError),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub store: TransactionStore,
}

impl ShellContext {
    pub fn new(mode: CliMode, store: TransactionStore) -> Self {
        Self {
            mode,
            registry: CommandRegistry::new(all_definitions()),
            store,
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Runs one parsed command line.
    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> CommandResult {
        let Some(definition) = self.registry.get(command) else {
            return Err(CommandError::UnknownCommand(command.to_string()));
        };
        (definition.handler)(self, args)
    }

    pub fn report_error(&self, err: &CommandError) {
        if let CommandError::UnknownCommand(name) = err {
            output::error(format!("Unknown command `{name}`."));
            if let Some(suggestion) = self.suggest_command(name) {
                output::info(format!("Did you mean `{suggestion}`?"));
            }
            return;
        }
        output::error(err);
    }

    /// Resolves a 1-based index over the date-descending view to a record id.
    pub fn transaction_at(&self, index: usize) -> Option<Uuid> {
        let view = self.store.by_date_desc();
        index
            .checked_sub(1)
            .and_then(|idx| view.get(idx))
            .map(|t| t.id)
    }

    pub fn transaction_snapshot(&self, id: Uuid) -> Option<Transaction> {
        self.store.get(id).cloned()
    }

    fn suggest_command(&self, input: &str) -> Option<&'static str> {
        let lowered = input.to_lowercase();
        self.registry
            .names()
            .map(|name| (name, strsim::jaro_winkler(name, &lowered)))
            .filter(|(_, score)| *score >= 0.8)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidArguments(format!("invalid date `{input}` (YYYY-MM-DD)")))
}

pub fn parse_amount(input: &str) -> Result<f64, CommandError> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid amount `{input}`")))?;
    if amount <= 0.0 {
        return Err(CommandError::InvalidArguments(
            "amount must be positive".into(),
        ));
    }
    Ok(amount)
}

pub fn parse_kind(input: &str) -> Result<TransactionKind, CommandError> {
    match input.to_lowercase().as_str() {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        other => Err(CommandError::InvalidArguments(format!(
            "invalid kind `{other}` (income|expense)"
        ))),
    }
}

pub fn parse_index(input: &str) -> Result<usize, CommandError> {
    let index: usize = input
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid index `{input}`")))?;
    if index == 0 {
        return Err(CommandError::InvalidArguments(
            "indexes start at 1".into(),
        ));
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_rejects_zero_and_garbage() {
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("abc").is_err());
        assert_eq!(parse_amount(" 12.50 ").expect("parses"), 12.5);
    }

    #[test]
    fn parse_kind_accepts_both_cases() {
        assert_eq!(parse_kind("Income").expect("parses"), TransactionKind::Income);
        assert_eq!(parse_kind("expense").expect("parses"), TransactionKind::Expense);
        assert!(parse_kind("transfer").is_err());
    }

    #[test]
    fn parse_index_is_one_based() {
        assert!(parse_index("0").is_err());
        assert_eq!(parse_index("3").expect("parses"), 3);
    }
}
