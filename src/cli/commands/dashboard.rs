//! Dashboard views: summary cards, category breakdown chart, insights,
//! and the recent-transaction list.

use colored::Colorize;

use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandResult, LoopControl, ShellContext};
use crate::cli::output::{self, money};
use crate::domain::{Transaction, TransactionKind};
use crate::summary::{self, CategoryTotal, Summary};

const CHART_WIDTH: usize = 28;
const RECENT_LIMIT: usize = 5;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "dashboard",
            "Show summary, breakdown, insights, and recent activity",
            "dashboard",
            handle_dashboard,
        ),
        CommandDefinition::new("summary", "Show summary metrics", "summary", handle_summary),
        CommandDefinition::new(
            "breakdown",
            "Show expense totals per category",
            "breakdown",
            handle_breakdown,
        ),
    ]
}

pub fn handle_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let transactions = context.store.transactions();
    let summary = summary::summarize(transactions);
    let breakdown = summary::category_breakdown(transactions);

    render_summary(&summary);
    render_breakdown(&breakdown, summary.total_expenses);
    render_insights(&summary, &breakdown);

    output::section("Recent Transactions");
    let view = context.store.by_date_desc();
    if view.is_empty() {
        output::info("No transactions yet. Run `transaction add` to record one.");
    } else {
        render_rows(&view, Some(RECENT_LIMIT));
        if view.len() > RECENT_LIMIT {
            output::info(format!(
                "{} more; run `transaction list` for all of them.",
                view.len() - RECENT_LIMIT
            ));
        }
    }
    Ok(LoopControl::Continue)
}

fn handle_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    render_summary(&summary::summarize(context.store.transactions()));
    Ok(LoopControl::Continue)
}

fn handle_breakdown(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let transactions = context.store.transactions();
    let summary = summary::summarize(transactions);
    render_breakdown(&summary::category_breakdown(transactions), summary.total_expenses);
    Ok(LoopControl::Continue)
}

fn render_summary(summary: &Summary) {
    output::section("Summary");
    println!("  Income    {}", money(summary.total_income).bright_green());
    println!("  Expenses  {}", money(summary.total_expenses).bright_red());
    println!("  Balance   {}", money(summary.balance).bold());
    println!("  Savings rate  {:.1}%", summary.savings_rate);
}

fn render_breakdown(breakdown: &[CategoryTotal], total_expenses: f64) {
    output::section("Spending by Category");
    if breakdown.is_empty() {
        output::info("No expenses recorded.");
        return;
    }
    let label_width = breakdown
        .iter()
        .map(|entry| entry.category.len())
        .max()
        .unwrap_or(0);
    let max_amount = breakdown
        .first()
        .map(|entry| entry.amount)
        .unwrap_or(0.0)
        .max(f64::EPSILON);
    for entry in breakdown {
        let bar_len = ((entry.amount / max_amount) * CHART_WIDTH as f64).round() as usize;
        let bar = "█".repeat(bar_len.max(1));
        let share = if total_expenses > 0.0 {
            entry.amount / total_expenses * 100.0
        } else {
            0.0
        };
        println!(
            "  {:label_width$}  {} {} ({:.1}%)",
            entry.category,
            bar.bright_red(),
            money(entry.amount),
            share,
        );
    }
}

fn render_insights(summary: &Summary, breakdown: &[CategoryTotal]) {
    output::section("Insights");
    println!(
        "  Highest spending category: {}",
        summary::highest_spending_category(breakdown)
    );
    if summary.savings_rate < 0.0 {
        output::warning("You are spending more than you earn this period.");
    } else {
        println!(
            "  You are keeping {:.1}% of your income.",
            summary.savings_rate
        );
    }
}

/// Prints transaction rows with their 1-based indexes. `limit` caps the
/// number of rows; indexes always refer to the full date-descending view.
pub fn render_rows(view: &[&Transaction], limit: Option<usize>) {
    let shown = limit.unwrap_or(view.len()).min(view.len());
    for (idx, transaction) in view.iter().take(shown).enumerate() {
        let amount = match transaction.kind {
            TransactionKind::Income => format!("+{}", money(transaction.amount)).bright_green(),
            TransactionKind::Expense => format!("-{}", money(transaction.amount)).bright_red(),
        };
        println!(
            "  {:>3}. {}  {:>12}  {:20}  {}",
            idx + 1,
            transaction.date,
            amount,
            transaction.category,
            transaction.description,
        );
    }
}
