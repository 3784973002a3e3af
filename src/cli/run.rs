use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, CommandSummary, detect::detect, duplicate::duplicate, export::export,
        import::import, init::init, script::script,
    },
};

/// Dispatch to the handler for the parsed command.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary to print and the error count
/// - `Err` if the command could not run (config, unreadable model, ...)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Slots) => Ok(CommandResult::new(CommandSummary::Slots, 0)),
        Some(Command::Detect(cmd)) => detect(cmd),
        Some(Command::Import(cmd)) => import(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Duplicate(cmd)) => duplicate(cmd),
        Some(Command::Script(cmd)) => script(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
