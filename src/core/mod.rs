//! Core pipeline: extraction, persistence, synchronization and merge.
//!
//! ## Module Structure
//!
//! - `scanner`: Finds translation-call literals in source text
//! - `sources`: Source file discovery
//! - `store`: Locale store and pending batch persistence
//! - `locales`: The configured locale set
//! - `sync`: Rebuilds every locale store from the extracted key set
//! - `merge`: Validates and applies a completed pending batch
//! - `context`: Resolved configuration shared by commands
//! - `error`: Error types

pub mod context;
pub mod error;
pub mod locales;
pub mod merge;
pub mod scanner;
pub mod sources;
pub mod store;
pub mod sync;

pub use context::{SourceKeys, SyncContext};
pub use locales::LocaleSet;
