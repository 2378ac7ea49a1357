//! # Reservation Store Boundary
//!
//! Abstracts the transactional backend that guarantees code uniqueness.
//! The whole contract is one operation: atomically insert a reservation
//! under `(namespace, code)` if and only if that key is absent — existence
//! check and write as one indivisible unit, serialized by the backend's
//! own transaction isolation. Any store with a conditional-put primitive
//! (a document transaction, a relational unique constraint, a KV
//! compare-and-set) can implement it.
//!
//! [`MemoryStore`] is the in-process implementation: a map behind a mutex,
//! where the mutex is the serialization point. It backs tests and
//! single-process deployments.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::{Entry, HashMap};
use thiserror::Error;

use ukhuwa_core::OwnerRef;

use crate::namespace::CodeNamespace;

/// A reserved code and its ownership metadata.
///
/// Immutable once stored; reservations are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    /// The reserved code, e.g. `UKU-202608-K7PM`.
    pub code: String,
    /// The user or case the code was minted for.
    pub owner: OwnerRef,
    /// UTC instant the reservation was written.
    pub reserved_at: DateTime<Utc>,
}

/// Result of an atomic insert-if-absent attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// The key was absent; the record is now stored.
    Reserved,
    /// Another reservation already holds this code. The candidate must be
    /// discarded.
    AlreadyExists,
}

/// Failure talking to the reservation backend.
///
/// Distinct from a collision: a collision is a normal outcome, a store
/// error means the uniqueness check could not be performed at all.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend is unreachable or refused the transaction.
    #[error("reservation store unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing backing storage failed.
    #[error("reservation store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing data could not be decoded.
    #[error("reservation store corrupt: {0}")]
    Corrupt(String),
}

/// A transactional index of reserved codes.
///
/// Implementations must make `try_reserve` atomic per key: when two
/// callers race on the same `(namespace, code)`, exactly one observes
/// [`ReserveOutcome::Reserved`].
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Insert `record` under `(namespace, record.code)` if absent.
    async fn try_reserve(
        &self,
        namespace: CodeNamespace,
        record: &ReservationRecord,
    ) -> Result<ReserveOutcome, StoreError>;
}

/// In-process reservation index.
#[derive(Debug, Default)]
pub struct MemoryStore {
    index: Mutex<HashMap<(CodeNamespace, String), ReservationRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a reservation.
    pub fn get(&self, namespace: CodeNamespace, code: &str) -> Option<ReservationRecord> {
        self.index
            .lock()
            .get(&(namespace, code.to_string()))
            .cloned()
    }

    /// Whether a code is reserved in the given namespace.
    pub fn contains(&self, namespace: CodeNamespace, code: &str) -> bool {
        self.get(namespace, code).is_some()
    }

    /// Total reservations across all namespaces.
    pub fn len(&self) -> usize {
        self.index.lock().len()
    }

    /// Whether the store holds no reservations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ReservationStore for MemoryStore {
    async fn try_reserve(
        &self,
        namespace: CodeNamespace,
        record: &ReservationRecord,
    ) -> Result<ReserveOutcome, StoreError> {
        let mut index = self.index.lock();
        match index.entry((namespace, record.code.clone())) {
            Entry::Occupied(_) => Ok(ReserveOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(ReserveOutcome::Reserved)
            }
        }
    }
}
