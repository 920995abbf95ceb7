//! Folding a completed pending batch back into the locale stores.
//!
//! The merge is gated: a batch with a single blank entry, or a key the
//! canonical store does not hold, is rejected as a whole before any store is
//! touched. Once the batch is valid, each locale is applied independently
//! and a write failure for one locale does not stop the others.

use super::error::{BatchProblem, MergeError, StoreError};
use super::locales::LocaleSet;
use super::store::{BatchFile, LocaleFiles, Messages, PendingBatch};

/// Collect every reason `batch` cannot be merged, in locale then key order.
///
/// `canonical` is the canonical store; every batch key must already be one
/// of its keys.
pub fn validate_batch(
    batch: &PendingBatch,
    locales: &LocaleSet,
    canonical: &Messages,
) -> Vec<BatchProblem> {
    let mut problems = Vec::new();

    for (locale, entries) in batch {
        if !locales.contains(locale) {
            problems.push(BatchProblem::UnknownLocale {
                locale: locale.clone(),
            });
            continue;
        }
        if locales.is_canonical(locale) {
            problems.push(BatchProblem::CanonicalLocale {
                locale: locale.clone(),
            });
            continue;
        }
        for (key, text) in entries {
            if !canonical.contains_key(key) {
                problems.push(BatchProblem::UnknownKey {
                    locale: locale.clone(),
                    key: key.clone(),
                });
            } else if text.trim().is_empty() {
                problems.push(BatchProblem::Blank {
                    locale: locale.clone(),
                    key: key.clone(),
                });
            }
        }
    }

    problems
}

/// Overwrite `store` with every non-blank entry. Returns the number applied.
pub fn apply_entries(store: &mut Messages, entries: &Messages) -> usize {
    let mut applied = 0;
    for (key, text) in entries {
        if text.trim().is_empty() {
            continue;
        }
        store.insert(key.clone(), text.clone());
        applied += 1;
    }
    applied
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMerge {
    pub locale: String,
    pub merged: usize,
}

#[derive(Debug)]
pub struct LocaleFailure {
    pub locale: String,
    pub error: StoreError,
}

#[derive(Debug)]
pub struct MergeReport {
    pub merged: usize,
    pub locales: Vec<LocaleMerge>,
    /// Locales whose store could not be read or written.
    pub failures: Vec<LocaleFailure>,
    /// True when the batch file was deleted. When some locales failed, the
    /// batch is instead rewritten to hold only their entries.
    pub batch_retired: bool,
}

impl MergeReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validates and applies the pending batch.
#[derive(Debug, Clone, Copy)]
pub struct Merger<'a> {
    locales: &'a LocaleSet,
    stores: &'a LocaleFiles,
    batch: &'a BatchFile,
}

impl<'a> Merger<'a> {
    pub fn new(locales: &'a LocaleSet, stores: &'a LocaleFiles, batch: &'a BatchFile) -> Self {
        Self {
            locales,
            stores,
            batch,
        }
    }

    pub fn run(&self) -> Result<MergeReport, MergeError> {
        let Some(batch) = self.batch.load()? else {
            return Err(MergeError::NothingToMerge {
                path: self.batch.path().to_path_buf(),
            });
        };

        let canonical = self.stores.load(self.locales.canonical())?;
        let problems = validate_batch(&batch, self.locales, &canonical);
        if !problems.is_empty() {
            return Err(MergeError::Incomplete(problems));
        }

        // Decode every target store up front: a malformed store must abort
        // the merge before any other store is rewritten.
        let mut failures = Vec::new();
        let mut targets: Vec<(&str, &Messages, Messages)> = Vec::with_capacity(batch.len());
        for (locale, entries) in &batch {
            match self.stores.load(locale) {
                Ok(store) => targets.push((locale.as_str(), entries, store)),
                Err(e) if e.is_malformed() => return Err(e.into()),
                Err(error) => failures.push(LocaleFailure {
                    locale: locale.clone(),
                    error,
                }),
            }
        }

        let mut merged = 0;
        let mut locales = Vec::with_capacity(targets.len());
        for (locale, entries, mut store) in targets {
            let applied = apply_entries(&mut store, entries);
            if applied == 0 {
                continue;
            }
            match self.stores.save(locale, &store) {
                Ok(()) => {
                    tracing::debug!(locale, applied, "Merged locale");
                    merged += applied;
                    locales.push(LocaleMerge {
                        locale: locale.to_string(),
                        merged: applied,
                    });
                }
                Err(error) => {
                    tracing::warn!(locale, "Failed to write locale store: {}", error);
                    failures.push(LocaleFailure {
                        locale: locale.to_string(),
                        error,
                    });
                }
            }
        }

        if merged == 0 && failures.is_empty() {
            return Err(MergeError::NothingMerged);
        }

        let batch_retired = if failures.is_empty() {
            self.batch.remove()?;
            true
        } else {
            let remaining: PendingBatch = failures
                .iter()
                .filter_map(|f| {
                    batch
                        .get(&f.locale)
                        .map(|entries| (f.locale.clone(), entries.clone()))
                })
                .collect();
            self.batch.save(&remaining)?;
            false
        };

        failures.sort_by(|a, b| a.locale.cmp(&b.locale));

        Ok(MergeReport {
            merged,
            locales,
            failures,
            batch_retired,
        })
    }
}
