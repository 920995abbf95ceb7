//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `synchronize`: Extract keys from source and rebuild every locale file
//! - `merge`: Fold a completed pending-translation batch into the locale files
//! - `status`: Show outstanding translation work without changing anything
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Synchronize(cmd)) => cmd.common.verbose,
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Status(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory to start searching for .glotsyncrc.json (default: current directory)
    #[arg(long, env = "GLOTSYNC_ROOT")]
    pub root: Option<PathBuf>,

    /// Canonical locale (overrides config file)
    #[arg(long)]
    pub canonical_locale: Option<String>,

    /// Source code root directory, relative to the config file (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Locale files directory, relative to the config file (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct SynchronizeCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translation keys and rebuild every locale file, writing a pending batch
    #[command(visible_alias = "sync")]
    Synchronize(SynchronizeCommand),
    /// Merge a fully translated pending batch into the locale files
    Merge(MergeCommand),
    /// Show whether translation work is outstanding
    Status(StatusCommand),
    /// Initialize a new .glotsyncrc.json configuration file
    Init,
}
