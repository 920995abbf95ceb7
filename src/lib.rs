//! Glotsync - translation key extraction and locale synchronization
//!
//! Glotsync scans application source for `tr("...")` style calls, keeps a
//! fixed set of locale JSON files in step with the keys it finds, and hands
//! untranslated entries to an external translation step through a pending
//! batch file that is later merged back.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`synchronize`, `merge`, `status`, `init`)
//! - `config`: Configuration file loading and validation
//! - `core`: Scanner, locale stores, synchronization and merge

pub mod cli;
pub mod config;
pub mod core;
