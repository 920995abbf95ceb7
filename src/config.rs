use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".glotsyncrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_call_name")]
    pub call_name: String,
    #[serde(default = "default_locales_root", alias = "localesDir")]
    pub locales_root: String,
    #[serde(default = "default_canonical_locale")]
    pub canonical_locale: String,
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    #[serde(default = "default_pending_file")]
    pub pending_file: String,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**", "**/build/**", "**/.git/**"]
        .map(String::from)
        .to_vec()
}

fn default_extensions() -> Vec<String> {
    ["js", "jsx", "ts", "tsx", "mjs", "cjs", "vue", "svelte", "html"]
        .map(String::from)
        .to_vec()
}

fn default_call_name() -> String {
    "tr".to_string()
}

fn default_locales_root() -> String {
    "./locales".to_string()
}

fn default_canonical_locale() -> String {
    "en".to_string()
}

fn default_locales() -> Vec<String> {
    vec![default_canonical_locale()]
}

fn default_pending_file() -> String {
    "./pending-translations.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            includes: Vec::new(),
            ignores: default_ignores(),
            extensions: default_extensions(),
            call_name: default_call_name(),
            locales_root: default_locales_root(),
            canonical_locale: default_canonical_locale(),
            locales: default_locales(),
            pending_file: default_pending_file(),
        }
    }
}

/// Locale ids become file names, so they are restricted to a safe alphabet.
fn is_valid_locale(locale: &str) -> bool {
    !locale.is_empty()
        && locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn is_valid_call_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
            }
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        if !is_valid_call_name(&self.call_name) {
            bail!("Invalid 'callName': \"{}\"", self.call_name);
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        if self.locales.is_empty() {
            bail!("'locales' must list at least one locale");
        }

        let mut seen = HashSet::new();
        for locale in &self.locales {
            if !is_valid_locale(locale) {
                bail!(
                    "Invalid locale \"{}\" in 'locales' (use letters, digits, '-' or '_')",
                    locale
                );
            }
            if !seen.insert(locale.as_str()) {
                bail!("Duplicate locale \"{}\" in 'locales'", locale);
            }
        }

        if !seen.contains(self.canonical_locale.as_str()) {
            bail!(
                "Canonical locale \"{}\" is not listed in 'locales' {:?}",
                self.canonical_locale,
                self.locales
            );
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative config paths resolve against: the config file's
    /// directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

/// Load configuration without validating it, so CLI overrides can be
/// applied first.
///
/// The start directory is canonicalized so the upward search can reach its
/// parents.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let start_dir = start_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve directory: {}", start_dir.display()))?;
    let start_dir = start_dir.as_path();

    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            tracing::debug!(path = %path.display(), "Loaded configuration");
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
