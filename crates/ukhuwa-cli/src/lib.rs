//! # ukhuwa-cli — Operator Tooling for the Ukhuwa Platform
//!
//! Provides the `ukhuwa` command-line interface used by intake operators
//! and support staff.
//!
//! ## Subcommands
//!
//! - `ukhuwa mrz <file>` — parse a passport machine-readable zone and
//!   print the extracted identity record as JSON.
//! - `ukhuwa code mint` — mint a user or case code against a file-backed
//!   reservation index.
//! - `ukhuwa code check` — structural validation of a presented code.

pub mod code;
pub mod file_store;
pub mod mrz;

pub use file_store::FileStore;
