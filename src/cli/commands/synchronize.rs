use anyhow::Result;

use super::super::args::SynchronizeCommand;
use super::{CommandResult, CommandSummary, SynchronizeSummary};
use crate::core::{SyncContext, sync::Synchronizer};

pub fn synchronize(cmd: SynchronizeCommand) -> Result<CommandResult> {
    let ctx = SyncContext::new(&cmd.common)?;

    let sources = ctx.collect_source_keys()?;
    tracing::info!(
        files = sources.files,
        keys = sources.keys.len(),
        "Collected translation keys"
    );

    let report = Synchronizer::new(&ctx.locales, &ctx.stores, &ctx.batch).run(&sources.keys)?;

    Ok(CommandResult::new(CommandSummary::Synchronize(
        SynchronizeSummary {
            source_files: sources.files,
            report,
            batch_path: ctx.batch.path().to_path_buf(),
            verbose: cmd.common.verbose,
        },
    )))
}
