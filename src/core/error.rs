//! Error types for the synchronization and merge pipeline.
//!
//! Absence of a resource is never an error at this level; only the merge
//! step turns a missing batch into [`MergeError::NothingToMerge`].

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing a persisted JSON resource (locale store or batch).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to read source file {}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No source files found under '{}'", root.display())]
    NoSourceFiles { root: PathBuf },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A single reason a pending batch cannot be merged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum BatchProblem {
    /// The entry has no text, or only whitespace.
    Blank { locale: String, key: String },
    /// The entry's key is not in the canonical store.
    UnknownKey { locale: String, key: String },
    /// The batch names a locale that is not configured.
    UnknownLocale { locale: String },
    /// The batch tries to overwrite the identity-mapped canonical store.
    CanonicalLocale { locale: String },
}

impl fmt::Display for BatchProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank { locale, key } => write!(f, "{}: {}", locale, key),
            Self::UnknownKey { locale, key } => {
                write!(f, "{}: {} (not a known key)", locale, key)
            }
            Self::UnknownLocale { locale } => write!(f, "{}: locale is not configured", locale),
            Self::CanonicalLocale { locale } => {
                write!(f, "{}: canonical locale cannot be translated", locale)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Nothing to merge: {} does not exist (run `synchronize` first)", path.display())]
    NothingToMerge { path: PathBuf },

    #[error("Pending batch is incomplete ({} problem(s))", .0.len())]
    Incomplete(Vec<BatchProblem>),

    #[error("Internal error: batch passed validation but no entries were merged")]
    NothingMerged,

    #[error(transparent)]
    Store(#[from] StoreError),
}
