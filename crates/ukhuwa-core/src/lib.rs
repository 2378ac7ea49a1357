//! # ukhuwa-core — Foundational Types for the Ukhuwa Platform
//!
//! Defines the type-system primitives shared by the document-intake and
//! code-reservation crates. Every other crate in the workspace depends on
//! `ukhuwa-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`UserId`] and [`CaseId`]
//!    are distinct types — you cannot pass a user identifier where a case
//!    identifier is expected. No bare strings or bare UUIDs for identifiers.
//!
//! 2. **Always-valid construction.** UUID-based identifiers cannot be
//!    constructed in an invalid state.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ukhuwa-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;

pub use error::ValidationError;
pub use identity::{CaseId, OwnerRef, UserId};
