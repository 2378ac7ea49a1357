//! # Reservation Algorithm
//!
//! Mints a code and reserves it against the store, retrying on collision.
//!
//! Each attempt generates a brand-new random candidate — never a
//! deterministic increment, so collision probability is independent per
//! attempt — and offers it to the store's atomic insert-if-absent.
//! Attempts are sequential: a parallel attempt could waste a reservation
//! after an earlier one already succeeded. The algorithm holds no lock and
//! keeps no state between attempts beyond the attempt counter; any number
//! of callers may race across tasks and processes, with the store's
//! transaction isolation as the sole serialization point.
//!
//! Collisions are transparent to the caller. Only two things surface: a
//! store failure, and exhaustion of the attempt budget — which means
//! namespace contention (or an unlucky run against a very full keyspace)
//! and MUST NOT be treated as "a code was probably reserved anyway".

use chrono::Utc;
use thiserror::Error;

use ukhuwa_core::{CaseId, OwnerRef, UserId};

use crate::namespace::CodeNamespace;
use crate::store::{ReservationRecord, ReservationStore, ReserveOutcome, StoreError};

/// Candidate codes offered to the store before giving up.
pub const MAX_RESERVE_ATTEMPTS: u32 = 10;

/// Failure to reserve a code.
#[derive(Error, Debug)]
pub enum ReservationError {
    /// Every candidate collided. No code was reserved; the enclosing
    /// create-user/create-case operation must abort.
    #[error("{namespace} code namespace exhausted after {attempts} reservation attempts")]
    Exhausted {
        /// The namespace that was contended.
        namespace: CodeNamespace,
        /// How many candidates were offered.
        attempts: u32,
    },

    /// The store could not perform the uniqueness check.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Reserve a fresh code in `namespace` for `owner`.
///
/// Up to [`MAX_RESERVE_ATTEMPTS`] sequential attempts; collisions are
/// retried with a new random candidate and logged at `warn`. Store errors
/// propagate immediately.
///
/// # Errors
///
/// [`ReservationError::Exhausted`] after ten collisions, or
/// [`ReservationError::Store`] if the backend fails.
pub async fn reserve_code<S>(
    store: &S,
    namespace: CodeNamespace,
    owner: OwnerRef,
) -> Result<ReservationRecord, ReservationError>
where
    S: ReservationStore + ?Sized,
{
    for attempt in 1..=MAX_RESERVE_ATTEMPTS {
        let now = Utc::now();
        let code = namespace.generate(now, &mut rand::thread_rng());
        let record = ReservationRecord {
            code,
            owner,
            reserved_at: now,
        };

        match store.try_reserve(namespace, &record).await? {
            ReserveOutcome::Reserved => {
                tracing::debug!(
                    namespace = %namespace,
                    code = %record.code,
                    owner = %record.owner,
                    attempt,
                    "code reserved"
                );
                return Ok(record);
            }
            ReserveOutcome::AlreadyExists => {
                tracing::warn!(
                    namespace = %namespace,
                    code = %record.code,
                    attempt,
                    max_attempts = MAX_RESERVE_ATTEMPTS,
                    "candidate code collided, retrying with a fresh candidate"
                );
            }
        }
    }

    Err(ReservationError::Exhausted {
        namespace,
        attempts: MAX_RESERVE_ATTEMPTS,
    })
}

/// Reserve a `UKU-…` account code for a user.
pub async fn reserve_user_code<S>(
    store: &S,
    user: UserId,
) -> Result<ReservationRecord, ReservationError>
where
    S: ReservationStore + ?Sized,
{
    reserve_code(store, CodeNamespace::User, OwnerRef::User(user)).await
}

/// Reserve a `UKC-…` code for a case record.
pub async fn reserve_case_code<S>(
    store: &S,
    case: CaseId,
) -> Result<ReservationRecord, ReservationError>
where
    S: ReservationStore + ?Sized,
{
    reserve_code(store, CodeNamespace::Case, OwnerRef::Case(case)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    use crate::store::MemoryStore;

    /// Store stub that reports a collision for every candidate.
    #[derive(Default)]
    struct AlwaysCollides {
        calls: AtomicU32,
    }

    #[async_trait]
    impl ReservationStore for AlwaysCollides {
        async fn try_reserve(
            &self,
            _namespace: CodeNamespace,
            _record: &ReservationRecord,
        ) -> Result<ReserveOutcome, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ReserveOutcome::AlreadyExists)
        }
    }

    /// Store stub that fails outright.
    struct Broken;

    #[async_trait]
    impl ReservationStore for Broken {
        async fn try_reserve(
            &self,
            _namespace: CodeNamespace,
            _record: &ReservationRecord,
        ) -> Result<ReserveOutcome, StoreError> {
            Err(StoreError::Unavailable("backend offline".into()))
        }
    }

    #[tokio::test]
    async fn first_attempt_usually_succeeds() {
        let store = MemoryStore::new();
        let user = UserId::new();

        let record = reserve_user_code(&store, user).await.unwrap();
        assert!(CodeNamespace::User.matches(&record.code));
        assert_eq!(record.owner, OwnerRef::User(user));
        assert!(store.contains(CodeNamespace::User, &record.code));
    }

    #[tokio::test]
    async fn exhaustion_after_ten_collisions() {
        let store = AlwaysCollides::default();

        let err = reserve_user_code(&store, UserId::new()).await.unwrap_err();
        match err {
            ReservationError::Exhausted {
                namespace,
                attempts,
            } => {
                assert_eq!(namespace, CodeNamespace::User);
                assert_eq!(attempts, MAX_RESERVE_ATTEMPTS);
            }
            other => panic!("expected Exhausted, got {other:?}"),
        }
        assert_eq!(store.calls.load(Ordering::SeqCst), MAX_RESERVE_ATTEMPTS);
    }

    #[tokio::test]
    async fn store_errors_propagate_without_retry() {
        let err = reserve_case_code(&Broken, CaseId::new()).await.unwrap_err();
        assert!(matches!(err, ReservationError::Store(_)));
    }

    #[tokio::test]
    async fn case_codes_carry_case_owner() {
        let store = MemoryStore::new();
        let case = CaseId::new();

        let record = reserve_case_code(&store, case).await.unwrap();
        assert!(CodeNamespace::Case.matches(&record.code));
        assert_eq!(record.owner, OwnerRef::Case(case));
    }
}
