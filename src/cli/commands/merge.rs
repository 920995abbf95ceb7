use anyhow::Result;

use super::super::args::MergeCommand;
use super::{CommandResult, CommandSummary, MergeSummary};
use crate::core::{SyncContext, error::MergeError, merge::Merger};

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let ctx = SyncContext::new(&cmd.common)?;
    let batch_path = ctx.batch.path().to_path_buf();

    let summary = match Merger::new(&ctx.locales, &ctx.stores, &ctx.batch).run() {
        Ok(report) => MergeSummary::Merged { report, batch_path },
        Err(MergeError::NothingToMerge { .. }) => MergeSummary::NothingToMerge { batch_path },
        Err(MergeError::Incomplete(problems)) => MergeSummary::Rejected {
            problems,
            batch_path,
        },
        Err(e) => return Err(e.into()),
    };

    Ok(CommandResult::new(CommandSummary::Merge(summary)))
}
