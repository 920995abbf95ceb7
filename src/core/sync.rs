//! Key synchronization.
//!
//! A synchronization run rebuilds every locale store from the canonical key
//! set extracted from source. Stores are never patched in place: each one is
//! recreated with exactly the canonical keys, carrying forward any text the
//! locale already had. Keys left without text in a non-canonical locale are
//! collected into the pending batch.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use super::error::SyncError;
use super::locales::LocaleSet;
use super::scanner::extract_keys;
use super::store::{BatchFile, LocaleFiles, Messages, PendingBatch};

/// Scan every file and union the extracted keys.
///
/// Bytes that are not valid UTF-8 are replaced, so a template in a legacy
/// encoding still yields its ASCII-delimited keys. A file that cannot be
/// read at all aborts the scan, since its keys would vanish from every store.
pub fn collect_keys<'a>(
    files: impl IntoIterator<Item = &'a Path>,
    call_name: &str,
) -> Result<BTreeSet<String>, SyncError> {
    let mut keys = BTreeSet::new();
    for path in files {
        let bytes = fs::read(path).map_err(|source| SyncError::Source {
            path: path.to_path_buf(),
            source,
        })?;
        let found = extract_keys(&String::from_utf8_lossy(&bytes), call_name);
        tracing::debug!(file = %path.display(), keys = found.len(), "Extracted keys");
        keys.extend(found);
    }
    Ok(keys)
}

/// Keys added to and removed from the canonical store.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct KeyDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

pub fn diff_keys(keys: &BTreeSet<String>, existing: &Messages) -> KeyDiff {
    KeyDiff {
        added: keys
            .iter()
            .filter(|k| !existing.contains_key(*k))
            .cloned()
            .collect(),
        removed: existing
            .keys()
            .filter(|k| !keys.contains(*k))
            .cloned()
            .collect(),
    }
}

/// A locale store rebuilt from the canonical key set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RebuiltStore {
    pub messages: Messages,
    /// Keys without usable text, in key order. Always empty for the canonical locale.
    pub pending: Vec<String>,
}

/// Rebuild one store so it holds exactly `keys`.
///
/// The canonical store is the identity mapping. Other stores keep their prior
/// text and seed new keys with an empty string; blank text marks a key pending.
pub fn rebuild_store(keys: &BTreeSet<String>, prior: &Messages, canonical: bool) -> RebuiltStore {
    let mut rebuilt = RebuiltStore::default();

    for key in keys {
        let text = if canonical {
            key.clone()
        } else {
            prior.get(key).cloned().unwrap_or_default()
        };
        if !canonical && text.trim().is_empty() {
            rebuilt.pending.push(key.clone());
        }
        rebuilt.messages.insert(key.clone(), text);
    }

    rebuilt
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSummary {
    pub locale: String,
    pub keys: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    /// A batch was written with `entries` keys, `carried` of them already
    /// translated in the batch it replaced.
    Written { entries: usize, carried: usize },
    /// Nothing is pending. `removed_stale` is true if an old batch was deleted.
    UpToDate { removed_stale: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub key_count: usize,
    pub diff: KeyDiff,
    pub locales: Vec<LocaleSummary>,
    pub batch: BatchOutcome,
}

/// Runs a synchronization against the locale stores and the pending batch.
#[derive(Debug, Clone, Copy)]
pub struct Synchronizer<'a> {
    locales: &'a LocaleSet,
    stores: &'a LocaleFiles,
    batch: &'a BatchFile,
}

impl<'a> Synchronizer<'a> {
    pub fn new(locales: &'a LocaleSet, stores: &'a LocaleFiles, batch: &'a BatchFile) -> Self {
        Self {
            locales,
            stores,
            batch,
        }
    }

    /// Synchronize every store with `keys`.
    ///
    /// Every store and the previous batch are decoded before anything is
    /// written, so a malformed file aborts the run with no effects.
    pub fn run(&self, keys: &BTreeSet<String>) -> Result<SyncReport, SyncError> {
        let previous_batch = self.batch.load()?.unwrap_or_default();

        let mut priors: Vec<(&str, Messages)> = Vec::with_capacity(self.locales.len());
        for locale in self.locales.iter() {
            priors.push((locale, self.stores.load(locale)?));
        }

        let diff = priors
            .iter()
            .find(|(locale, _)| self.locales.is_canonical(locale))
            .map(|(_, prior)| diff_keys(keys, prior))
            .unwrap_or_default();

        let mut batch = PendingBatch::new();
        let mut carried = 0;
        let mut summaries = Vec::with_capacity(priors.len());
        let mut rebuilt_stores = Vec::with_capacity(priors.len());

        for (locale, prior) in &priors {
            let rebuilt = rebuild_store(keys, prior, self.locales.is_canonical(locale));

            if !rebuilt.pending.is_empty() {
                let previous = previous_batch.get(*locale);
                let entries: Messages = rebuilt
                    .pending
                    .iter()
                    .map(|key| {
                        let text = previous
                            .and_then(|entries| entries.get(key))
                            .filter(|text| !text.trim().is_empty())
                            .cloned()
                            .unwrap_or_default();
                        if !text.is_empty() {
                            carried += 1;
                        }
                        (key.clone(), text)
                    })
                    .collect();
                batch.insert(locale.to_string(), entries);
            }

            summaries.push(LocaleSummary {
                locale: locale.to_string(),
                keys: rebuilt.messages.len(),
                pending: rebuilt.pending.len(),
            });
            rebuilt_stores.push((*locale, rebuilt.messages));
        }

        for (locale, messages) in &rebuilt_stores {
            self.stores.save(locale, messages)?;
            tracing::debug!(locale, keys = messages.len(), "Wrote locale store");
        }

        let outcome = if batch.is_empty() {
            BatchOutcome::UpToDate {
                removed_stale: self.batch.remove()?,
            }
        } else {
            self.batch.save(&batch)?;
            BatchOutcome::Written {
                entries: batch.values().map(Messages::len).sum(),
                carried,
            }
        };

        Ok(SyncReport {
            key_count: keys.len(),
            diff,
            locales: summaries,
            batch: outcome,
        })
    }
}
