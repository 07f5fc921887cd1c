//! Transaction commands: list, show, add, edit, remove.
//!
//! Indexes shown by `list` are 1-based over the date-descending view and are
//! what `edit`, `remove`, and `show` accept. Interactive mode drives the
//! add/edit form; script mode takes every field as arguments.

use chrono::Utc;

use crate::cli::commands::{dashboard, CommandDefinition};
use crate::cli::core::{
    parse_amount, parse_date, parse_index, parse_kind, CliMode, CommandError, CommandResult,
    LoopControl, ShellContext,
};
use crate::cli::forms::{self, FormSubmission, TransactionForm};
use crate::cli::output::{self, money};
use crate::domain::{TransactionDraft, TransactionPatch};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "transaction",
        "Manage transactions",
        "transaction <list|show|add|edit|remove> [args]",
        handle_transaction,
    )]
}

fn handle_transaction(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(subcommand) = args.first() else {
        return Err(CommandError::InvalidArguments(
            "usage: transaction <list|show|add|edit|remove>".into(),
        ));
    };
    let rest = &args[1..];
    match subcommand.to_lowercase().as_str() {
        "list" => handle_list(context),
        "show" => handle_show(context, rest),
        "add" => handle_add(context, rest),
        "edit" => handle_edit(context, rest),
        "remove" => handle_remove(context, rest),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown transaction subcommand `{other}`"
        ))),
    }
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    output::section("Transactions");
    let view = context.store.by_date_desc();
    if view.is_empty() {
        output::info("No transactions recorded.");
    } else {
        dashboard::render_rows(&view, None);
    }
    Ok(LoopControl::Continue)
}

fn handle_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = required_index(args, "usage: transaction show <index>")?;
    let Some(id) = context.transaction_at(index) else {
        output::warning(format!("No transaction at index {index}."));
        return Ok(LoopControl::Continue);
    };
    // id came from the live view, so the snapshot is present
    if let Some(transaction) = context.transaction_snapshot(id) {
        output::section("Transaction");
        println!("  Id          {}", transaction.id);
        println!("  Description {}", transaction.description);
        println!("  Amount      {}", money(transaction.amount));
        println!("  Type        {}", transaction.kind);
        println!("  Category    {}", transaction.category);
        println!("  Date        {}", transaction.date);
    }
    Ok(LoopControl::Continue)
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match context.mode {
        CliMode::Interactive if args.is_empty() => {
            let mut form = TransactionForm::create(Utc::now().date_naive());
            let submission = forms::run_interactive(&mut form)?;
            commit(context, submission)
        }
        _ => {
            // transaction add <income|expense> <amount> <category> <description> [date]
            if args.len() < 4 {
                return Err(CommandError::InvalidArguments(
                    "usage: transaction add <income|expense> <amount> <category> <description> [YYYY-MM-DD]".into(),
                ));
            }
            let kind = parse_kind(args[0])?;
            let amount = parse_amount(args[1])?;
            let category = args[2].to_string();
            let description = args[3].to_string();
            let date = match args.get(4) {
                Some(raw) => parse_date(raw)?,
                None => Utc::now().date_naive(),
            };
            if description.trim().is_empty() || category.trim().is_empty() {
                return Err(CommandError::InvalidArguments(
                    "description and category must not be empty".into(),
                ));
            }
            let draft = TransactionDraft::new(description, amount, kind, category, date);
            commit(context, FormSubmission::Create(draft))
        }
    }
}

fn handle_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = required_index(args, "usage: transaction edit <index> [field value]")?;
    let Some(id) = context.transaction_at(index) else {
        output::warning(format!("No transaction at index {index}."));
        return Ok(LoopControl::Continue);
    };
    if args.len() == 1 {
        if context.mode != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(
                "usage: transaction edit <index> <description|amount|kind|category|date> <value>"
                    .into(),
            ));
        }
        let mut form = TransactionForm::edit(&context.store, id, Utc::now().date_naive());
        let submission = forms::run_interactive(&mut form)?;
        return commit(context, submission);
    }
    // single-field edit: transaction edit <index> <field> <value>
    if args.len() < 3 {
        return Err(CommandError::InvalidArguments(
            "usage: transaction edit <index> <description|amount|kind|category|date> <value>"
                .into(),
        ));
    }
    let patch = field_patch(args[1], &args[2..].join(" "))?;
    commit(context, FormSubmission::Update(id, patch))
}

fn handle_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = required_index(args, "usage: transaction remove <index>")?;
    let Some(id) = context.transaction_at(index) else {
        output::warning(format!("No transaction at index {index}."));
        return Ok(LoopControl::Continue);
    };
    if context.store.remove(id)? {
        output::success("Transaction removed.");
    }
    Ok(LoopControl::Continue)
}

fn commit(context: &mut ShellContext, submission: FormSubmission) -> CommandResult {
    match submission {
        FormSubmission::Create(draft) => {
            context.store.add(draft)?;
            output::success("Transaction added.");
        }
        FormSubmission::Update(id, patch) => {
            if context.store.update(id, patch)? {
                output::success("Transaction updated.");
            } else {
                output::warning("Transaction no longer exists; nothing changed.");
            }
        }
    }
    Ok(LoopControl::Continue)
}

fn required_index(args: &[&str], usage: &str) -> Result<usize, CommandError> {
    let raw = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments(usage.into()))?;
    parse_index(raw)
}

fn field_patch(field: &str, value: &str) -> Result<TransactionPatch, CommandError> {
    let mut patch = TransactionPatch::default();
    match field.to_lowercase().as_str() {
        "description" => patch.description = Some(value.to_string()),
        "amount" => patch.amount = Some(parse_amount(value)?),
        "kind" | "type" => patch.kind = Some(parse_kind(value)?),
        "category" => patch.category = Some(value.to_string()),
        "date" => patch.date = Some(parse_date(value)?),
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown field `{other}` (description|amount|kind|category|date)"
            )))
        }
    }
    Ok(patch)
}
