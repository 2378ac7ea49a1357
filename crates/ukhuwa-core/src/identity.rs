//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the Ukhuwa platform.
//! Each identifier is a distinct type — you cannot pass a [`UserId`] where a
//! [`CaseId`] is expected.
//!
//! UUID-based identifiers are always valid by construction. [`OwnerRef`]
//! tags an identifier with the kind of record that owns it, so downstream
//! stores can persist ownership without losing the distinction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// A unique identifier for a registered user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    /// Create a new random user identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a user identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self)
    }
}

/// A unique identifier for a migrant-services case record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(Uuid);

impl CaseId {
    /// Create a new random case identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a case identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CaseId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CaseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self)
    }
}

/// The owner of a reserved code: either a user account or a case record.
///
/// Rendered as `user:<uuid>` / `case:<uuid>` for logs and storage keys,
/// and parsed back from the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum OwnerRef {
    /// Owned by a user account.
    User(UserId),
    /// Owned by a case record.
    Case(CaseId),
}

impl std::fmt::Display for OwnerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User(id) => write!(f, "user:{id}"),
            Self::Case(id) => write!(f, "case:{id}"),
        }
    }
}

impl std::str::FromStr for OwnerRef {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .split_once(':')
            .ok_or_else(|| ValidationError::InvalidOwnerRef(s.to_string()))?;
        match kind {
            "user" => id
                .parse()
                .map(Self::User)
                .map_err(|_| ValidationError::InvalidOwnerRef(s.to_string())),
            "case" => id
                .parse()
                .map(Self::Case)
                .map_err(|_| ValidationError::InvalidOwnerRef(s.to_string())),
            _ => Err(ValidationError::InvalidOwnerRef(s.to_string())),
        }
    }
}
