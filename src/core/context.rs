use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        error::SyncError,
        locales::LocaleSet,
        sources::{SourceFilter, SourceScan, scan_source_files},
        store::{BatchFile, LocaleFiles},
        sync::collect_keys,
    },
};

/// The canonical key set and how many files it was extracted from.
#[derive(Debug, Default)]
pub struct SourceKeys {
    pub files: usize,
    pub keys: BTreeSet<String>,
}

/// Resolved project settings shared by every command.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (e.g. `--canonical-locale en`)
/// 2. `.glotsyncrc.json`, searched upward from the working directory
/// 3. Built-in defaults
#[derive(Debug)]
pub struct SyncContext {
    pub config: Config,
    /// Directory relative config paths resolve against.
    pub root_dir: PathBuf,
    pub source_root: PathBuf,
    pub locales: LocaleSet,
    pub stores: LocaleFiles,
    pub batch: BatchFile,
}

impl SyncContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let start_dir = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let loaded = load_config(&start_dir)?;
        if !loaded.from_file {
            tracing::info!("No .glotsyncrc.json found, using default configuration");
        }

        let mut config = loaded.config;
        if let Some(ref canonical) = common_args.canonical_locale {
            config.canonical_locale = canonical.clone();
        }
        if let Some(ref source_root) = common_args.source_root {
            config.source_root = source_root.to_string_lossy().to_string();
        }
        if let Some(ref locales_root) = common_args.locales_root {
            config.locales_root = locales_root.to_string_lossy().to_string();
        }

        Self::from_config(config, loaded.base_dir)
    }

    pub fn from_config(config: Config, root_dir: PathBuf) -> Result<Self> {
        config.validate()?;

        let source_root = resolve(&root_dir, &config.source_root);
        let stores = LocaleFiles::new(resolve(&root_dir, &config.locales_root));
        let batch = BatchFile::new(resolve(&root_dir, &config.pending_file));
        let locales = LocaleSet::new(config.canonical_locale.clone(), config.locales.clone());

        Ok(Self {
            config,
            root_dir,
            source_root,
            locales,
            stores,
            batch,
        })
    }

    pub fn scan_sources(&self) -> SourceScan {
        scan_source_files(
            &self.source_root,
            SourceFilter {
                includes: &self.config.includes,
                ignores: &self.config.ignores,
                extensions: &self.config.extensions,
            },
        )
    }

    /// Scan the source tree and extract the canonical key set.
    ///
    /// Finding no source file at all is an error: a mistyped source root
    /// would otherwise empty every locale store.
    pub fn collect_source_keys(&self) -> Result<SourceKeys, SyncError> {
        let scan = self.scan_sources();
        if scan.files.is_empty() {
            return Err(SyncError::NoSourceFiles {
                root: self.source_root.clone(),
            });
        }

        let keys = collect_keys(
            scan.files.iter().map(PathBuf::as_path),
            &self.config.call_name,
        )?;
        Ok(SourceKeys {
            files: scan.files.len(),
            keys,
        })
    }
}

fn resolve(root_dir: &Path, path: &str) -> PathBuf {
    let p = Path::new(path);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(".").unwrap_or(p);
        root_dir.join(rel)
    }
}
