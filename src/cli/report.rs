//! Report formatting and printing utilities.
//!
//! Progress and results go to stdout; rejected merges and usage errors go to
//! stderr. Separate from core logic so glotsync can be used as a library.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, LocaleStatus, MergeSummary, StatusSummary,
    SynchronizeSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::error::BatchProblem;
use crate::core::merge::MergeReport;
use crate::core::sync::BatchOutcome;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of added/removed keys listed without `--verbose`.
const MAX_KEYS_DISPLAY: usize = 20;

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock(), &mut io::stderr().lock());
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(result: &CommandResult, out: &mut O, err: &mut E) {
    match &result.summary {
        CommandSummary::Synchronize(summary) => print_synchronize(summary, out),
        CommandSummary::Merge(summary) => print_merge(summary, out, err),
        CommandSummary::Status(summary) => print_status(summary, out),
        CommandSummary::Init(summary) => print_init(summary, out, err),
    }
}

/// Print a fatal error.
pub fn print_error(error: &anyhow::Error) {
    let mut err = io::stderr().lock();
    let _ = writeln!(err, "{} {}", "error:".bold().red(), error);
    for cause in error.chain().skip(1) {
        let _ = writeln!(err, "  {} {}", "caused by:".dimmed(), cause);
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn print_keys<W: Write>(label: &str, marker: &str, keys: &[String], verbose: bool, out: &mut W) {
    if keys.is_empty() {
        return;
    }
    let _ = writeln!(out, "{} ({}):", label, keys.len());
    let shown = if verbose { keys.len() } else { MAX_KEYS_DISPLAY };
    for key in keys.iter().take(shown) {
        let _ = writeln!(out, "  {} {}", marker, key);
    }
    if keys.len() > shown {
        let _ = writeln!(
            out,
            "  {} (use {} to list all)",
            format!("... and {} more", keys.len() - shown).dimmed(),
            "-v".cyan()
        );
    }
}

fn print_synchronize<W: Write>(summary: &SynchronizeSummary, out: &mut W) {
    let report = &summary.report;
    let _ = writeln!(
        out,
        "Scanned {}, found {}",
        plural(summary.source_files, "source file", "source files"),
        plural(report.key_count, "key", "keys")
    );

    print_keys("Added keys", &"+".green().to_string(), &report.diff.added, summary.verbose, out);
    print_keys("Removed keys", &"-".red().to_string(), &report.diff.removed, summary.verbose, out);

    for locale in &report.locales {
        if locale.pending == 0 {
            let _ = writeln!(
                out,
                "{} {}: {}",
                SUCCESS_MARK.green(),
                locale.locale.bold(),
                plural(locale.keys, "key", "keys")
            );
        } else {
            let _ = writeln!(
                out,
                "  {}: {}, {}",
                locale.locale.bold(),
                plural(locale.keys, "key", "keys"),
                format!("{} pending", locale.pending).yellow()
            );
        }
    }

    match report.batch {
        BatchOutcome::Written { entries, carried } => {
            let _ = writeln!(
                out,
                "{} {} ({})",
                "Wrote pending batch".yellow().bold(),
                summary.batch_path.display(),
                plural(entries, "entry", "entries")
            );
            if carried > 0 {
                let _ = writeln!(
                    out,
                    "  kept {} from the previous batch",
                    plural(carried, "translated entry", "translated entries")
                );
            }
            let _ = writeln!(
                out,
                "Fill in every blank entry, then run {}.",
                "glotsync merge".cyan()
            );
        }
        BatchOutcome::UpToDate { removed_stale } => {
            if removed_stale {
                let _ = writeln!(
                    out,
                    "Removed stale pending batch {}",
                    summary.batch_path.display()
                );
            }
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                "All locales are up to date".green()
            );
        }
    }
}

fn print_merge<O: Write, E: Write>(summary: &MergeSummary, out: &mut O, err: &mut E) {
    match summary {
        MergeSummary::Merged { report, batch_path } => print_merged(report, batch_path, out, err),
        MergeSummary::NothingToMerge { batch_path } => {
            let _ = writeln!(
                err,
                "{} Nothing to merge: {} does not exist.",
                "error:".bold().red(),
                batch_path.display()
            );
            let _ = writeln!(err, "Run {} first.", "glotsync synchronize".cyan());
        }
        MergeSummary::Rejected {
            problems,
            batch_path,
        } => print_rejected(problems, batch_path, err),
    }
}

fn print_merged<O: Write, E: Write>(
    report: &MergeReport,
    batch_path: &Path,
    out: &mut O,
    err: &mut E,
) {
    for locale in &report.locales {
        let _ = writeln!(
            out,
            "{} {}: merged {}",
            SUCCESS_MARK.green(),
            locale.locale.bold(),
            plural(locale.merged, "entry", "entries")
        );
    }
    for failure in &report.failures {
        let _ = writeln!(
            err,
            "{} {}: {}",
            FAILURE_MARK.red(),
            failure.locale.bold(),
            failure.error
        );
    }

    let _ = writeln!(
        out,
        "{} {}",
        "Merged".green().bold(),
        plural(report.merged, "entry", "entries")
    );

    if report.batch_retired {
        let _ = writeln!(out, "Removed pending batch {}", batch_path.display());
    } else {
        let _ = writeln!(
            err,
            "{} {} could not be updated; their entries remain in {}",
            "error:".bold().red(),
            plural(report.failures.len(), "locale", "locales"),
            batch_path.display()
        );
        let _ = writeln!(err, "Fix the problem and run {} again.", "glotsync merge".cyan());
    }
}

fn print_rejected<E: Write>(problems: &[BatchProblem], batch_path: &Path, err: &mut E) {
    let _ = writeln!(
        err,
        "{} Pending batch {} is incomplete; nothing was merged.",
        "error:".bold().red(),
        batch_path.display()
    );
    for problem in problems {
        let _ = writeln!(err, "  {} {}", FAILURE_MARK.red(), problem);
    }
    let _ = writeln!(
        err,
        "{}",
        format!("{} must be fixed before merging", plural(problems.len(), "entry", "entries"))
            .dimmed()
    );
}

fn print_status<W: Write>(summary: &StatusSummary, out: &mut W) {
    let Some(pending) = &summary.pending else {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            "No pending batch: no outstanding translation work".green()
        );
        return;
    };

    let _ = writeln!(out, "Pending batch {}:", summary.batch_path.display());
    for LocaleStatus {
        locale,
        filled,
        blank,
    } in pending
    {
        let blank_text = if *blank == 0 {
            format!("{} blank", blank).green()
        } else {
            format!("{} blank", blank).yellow()
        };
        let _ = writeln!(out, "  {}: {} filled, {}", locale.bold(), filled, blank_text);
    }

    let total_blank: usize = pending.iter().map(|s| s.blank).sum();
    if total_blank == 0 {
        let _ = writeln!(
            out,
            "{} Ready to merge: run {}",
            SUCCESS_MARK.green(),
            "glotsync merge".cyan()
        );
    } else {
        let _ = writeln!(
            out,
            "{} without a translation",
            plural(total_blank, "entry", "entries")
        );
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}
