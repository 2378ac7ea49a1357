//! # Parsed MRZ Records
//!
//! Output types of the TD3 parser. Every identity field is independently
//! optional: optical character recognition routinely garbles individual
//! fields, and partial identity data is more useful to the intake flow than
//! no data. Only the document type is guaranteed when a parse succeeds.

use serde::{Deserialize, Serialize};

use crate::date::MrzDate;

/// The travel document type asserted by the zone's sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// TD3 passport booklet.
    Passport,
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Passport => write!(f, "passport"),
        }
    }
}

/// Sex as encoded at position 20 of line 2.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Encoded `M`.
    Male,
    /// Encoded `F`.
    Female,
    /// Encoded as filler, or unreadable.
    #[default]
    Unspecified,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// Per-digit check results for the zone.
///
/// `None` means the check could not be evaluated (position missing from a
/// truncated line, or the check character is not readable as a digit).
/// Check failures never fail the parse — consumers decide how much to
/// trust a zone that fails its arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrzChecks {
    /// Document number check at position 9 of line 2.
    pub document_number: Option<bool>,
    /// Birth date check at position 19 of line 2.
    pub birth_date: Option<bool>,
    /// Expiry date check at position 27 of line 2.
    pub expiry_date: Option<bool>,
    /// Personal number check at position 42 of line 2. A filler check
    /// character is accepted as 0 when the field is absent.
    pub personal_number: Option<bool>,
    /// Composite check at position 43 of line 2, spanning the document
    /// number, birth date, and expiry/personal-number groups.
    pub composite: Option<bool>,
}

impl MrzChecks {
    /// Whether every evaluable check passed (vacuously true when none
    /// could be evaluated).
    pub fn all_passed(&self) -> bool {
        [
            self.document_number,
            self.birth_date,
            self.expiry_date,
            self.personal_number,
            self.composite,
        ]
        .iter()
        .all(|c| c.unwrap_or(true))
    }
}

/// Structured identity data extracted from a TD3 machine-readable zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrzRecord {
    /// Always [`DocumentType::Passport`] for a successful TD3 parse.
    pub document_type: DocumentType,

    /// Issuing state or organization, three characters, uppercased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_country: Option<String>,

    /// Primary identifier (surname), filler-stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,

    /// Secondary identifier (given names), space-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_names: Option<String>,

    /// Derived `surname + " " + given_names`, trimmed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Document number, up to nine characters, filler-stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,

    /// Nationality of the holder, three characters, uppercased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,

    /// Date of birth. Range-validated only — see [`MrzDate`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<MrzDate>,

    /// Sex of the holder.
    pub sex: Sex,

    /// Date of expiry. Range-validated only — see [`MrzDate`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<MrzDate>,

    /// Optional personal number assigned by the issuing state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_number: Option<String>,

    /// Check digit verification results.
    pub checks: MrzChecks,
}
