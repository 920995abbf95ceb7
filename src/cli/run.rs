use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, init::init, merge::merge, status::status, synchronize::synchronize,
    },
};

/// Dispatch to the command handler.
///
/// Returns `Err` only for fatal conditions (bad config, malformed files,
/// I/O errors). Rejected merges are reported through the result.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Synchronize(cmd)) => synchronize(cmd),
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Status(cmd)) => status(cmd),
        Some(Command::Init) => init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
