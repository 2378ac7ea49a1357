//! # ukhuwa-codes — Unique Code Minting and Reservation
//!
//! Mints the human-shareable codes that identify user accounts
//! (`UKU-202608-K7PM`) and migrant-services cases (`UKC-20260806-W3XQ2`),
//! and reserves them against a transactional index so that concurrent
//! callers — across tasks and across processes — can never mint the same
//! code twice.
//!
//! ## Guarantees
//!
//! - A returned code is unique within its namespace, enforced by the
//!   store's atomic insert-if-absent, not by in-process locking.
//! - Collisions are retried transparently with fresh random candidates,
//!   up to ten attempts; exhaustion is an explicit error, never a
//!   silently duplicated code.
//!
//! ## Non-Guarantees
//!
//! - No sequential or monotonic ordering of codes.
//! - No recycling: reservations are permanent.
//! - No cross-namespace uniqueness — the namespaces are disjoint
//!   keyspaces by design.

pub mod alphabet;
pub mod namespace;
pub mod reserve;
pub mod store;

pub use namespace::{parse_code, CodeNamespace, CodeParts};
pub use reserve::{
    reserve_case_code, reserve_code, reserve_user_code, ReservationError, MAX_RESERVE_ATTEMPTS,
};
pub use store::{MemoryStore, ReservationRecord, ReservationStore, ReserveOutcome, StoreError};
