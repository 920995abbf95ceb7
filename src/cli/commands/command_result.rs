use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{
    error::BatchProblem,
    merge::MergeReport,
    sync::SyncReport,
};

#[derive(Debug)]
pub struct SynchronizeSummary {
    pub source_files: usize,
    pub report: SyncReport,
    pub batch_path: PathBuf,
    pub verbose: bool,
}

#[derive(Debug)]
pub enum MergeSummary {
    Merged {
        report: MergeReport,
        batch_path: PathBuf,
    },
    /// No batch file exists.
    NothingToMerge { batch_path: PathBuf },
    /// The batch failed validation; nothing was written.
    Rejected {
        problems: Vec<BatchProblem>,
        batch_path: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStatus {
    pub locale: String,
    pub filled: usize,
    pub blank: usize,
}

#[derive(Debug)]
pub struct StatusSummary {
    pub batch_path: PathBuf,
    /// `None` when no batch exists.
    pub pending: Option<Vec<LocaleStatus>>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub enum CommandSummary {
    Synchronize(SynchronizeSummary),
    Merge(MergeSummary),
    Status(StatusSummary),
    Init(InitSummary),
}

/// Result of running a glotsync command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self { summary }
    }

    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Synchronize(_) | CommandSummary::Status(_) => ExitStatus::Success,
            CommandSummary::Merge(MergeSummary::Merged { report, .. }) if report.is_complete() => {
                ExitStatus::Success
            }
            CommandSummary::Merge(_) => ExitStatus::Failure,
            CommandSummary::Init(InitSummary { created }) => {
                if *created {
                    ExitStatus::Success
                } else {
                    ExitStatus::Failure
                }
            }
        }
    }
}
