//! Persistence for locale stores and the pending-translation batch.
//!
//! Both resources are plain JSON objects written with 2-space indentation,
//! sorted keys and a trailing newline, so identical content always produces
//! identical bytes.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::StoreError;

/// Key to translated text for one locale.
pub type Messages = BTreeMap<String, String>;

/// Locale to the entries still waiting for translation.
pub type PendingBatch = BTreeMap<String, Messages>;

/// Reads and writes `<root>/<locale>.json` locale stores.
#[derive(Debug, Clone)]
pub struct LocaleFiles {
    root: PathBuf,
}

impl LocaleFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, locale: &str) -> PathBuf {
        self.root.join(format!("{}.json", locale))
    }

    /// Load a locale store. A missing file is an empty store.
    pub fn load(&self, locale: &str) -> Result<Messages, StoreError> {
        Ok(read_json(&self.path(locale))?.unwrap_or_default())
    }

    pub fn save(&self, locale: &str, messages: &Messages) -> Result<(), StoreError> {
        write_json(&self.path(locale), messages)
    }
}

/// The single pending-batch file.
#[derive(Debug, Clone)]
pub struct BatchFile {
    path: PathBuf,
}

impl BatchFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the batch, or `None` when no batch exists.
    pub fn load(&self) -> Result<Option<PendingBatch>, StoreError> {
        read_json(&self.path)
    }

    pub fn save(&self, batch: &PendingBatch) -> Result<(), StoreError> {
        write_json(&self.path, batch)
    }

    /// Delete the batch. Returns `false` if there was nothing to delete.
    pub fn remove(&self) -> Result<bool, StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }
}

/// Read and decode a JSON file.
///
/// Returns `Ok(None)` if the file does not exist or holds only whitespace.
/// Anything else that fails to decode is [`StoreError::Malformed`].
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| StoreError::malformed(path, e))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    let content =
        serde_json::to_string_pretty(value).map_err(|e| StoreError::io(path, io::Error::other(e)))?;

    fs::write(path, format!("{}\n", content)).map_err(|e| StoreError::io(path, e))
}
