//! Shell housekeeping commands.

use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandResult, LoopControl, ShellContext};
use crate::cli::output;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("help", "Show available commands", "help", handle_help),
        CommandDefinition::new(
            "reload",
            "Re-read transactions from disk",
            "reload",
            handle_reload,
        ),
        CommandDefinition::new("exit", "Leave the shell", "exit", handle_exit),
        CommandDefinition::new("quit", "Leave the shell", "quit", handle_exit),
    ]
}

fn handle_help(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Commands");
    let width = context
        .registry
        .iter()
        .map(|definition| definition.usage.len())
        .max()
        .unwrap_or(0);
    for definition in context.registry.iter() {
        println!("  {:width$}  {}", definition.usage, definition.description);
    }
    Ok(LoopControl::Continue)
}

fn handle_reload(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.store.reload()?;
    output::success(format!("Reloaded {} transactions.", context.store.len()));
    Ok(LoopControl::Continue)
}

fn handle_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Ok(LoopControl::Exit)
}
