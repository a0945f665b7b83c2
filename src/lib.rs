//! Transdiff - changed translation keys from a localization diff
//!
//! Transdiff is a CLI tool and library that reads a unified diff restricted to
//! locale files (e.g. `git diff master -U0 -- '*Messages_fr_FR.json'`) and
//! lists, per file, the translation keys whose value really changed. Keys that
//! were only re-emitted by surrounding edits (a trailing comma, a moved line)
//! are left out.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Diff parsing, change classification and report rendering

pub mod cli;
pub mod config;
pub mod core;
