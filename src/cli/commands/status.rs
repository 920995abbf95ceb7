use anyhow::Result;

use super::super::args::StatusCommand;
use super::{CommandResult, CommandSummary, LocaleStatus, StatusSummary};
use crate::core::{SyncContext, store::PendingBatch};

pub fn status(cmd: StatusCommand) -> Result<CommandResult> {
    let ctx = SyncContext::new(&cmd.common)?;
    let pending = ctx.batch.load()?.map(|batch| locale_statuses(&batch));

    Ok(CommandResult::new(CommandSummary::Status(StatusSummary {
        batch_path: ctx.batch.path().to_path_buf(),
        pending,
    })))
}

fn locale_statuses(batch: &PendingBatch) -> Vec<LocaleStatus> {
    batch
        .iter()
        .map(|(locale, entries)| {
            let blank = entries
                .values()
                .filter(|text| text.trim().is_empty())
                .count();
            LocaleStatus {
                locale: locale.clone(),
                filled: entries.len() - blank,
                blank,
            }
        })
        .collect()
}
