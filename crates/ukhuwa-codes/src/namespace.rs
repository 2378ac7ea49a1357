//! # Code Namespaces
//!
//! A namespace is an independent keyspace of reservable codes with its own
//! prefix and date-part granularity. User codes and case codes never share
//! an index: a user code and a case code with the same suffix are distinct
//! reservations, and that is acceptable.
//!
//! Code shape: `PREFIX-DATEPART-SUFFIX`, e.g. `UKU-202608-K7PM` or
//! `UKC-20260806-W3XQ2`. The date part is the UTC date at generation time.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::alphabet::{self, MAX_SUFFIX_LEN, MIN_SUFFIX_LEN};

/// The keyspaces codes can be minted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeNamespace {
    /// Account codes for registered users. Prefix `UKU`, month-granular
    /// date part (`YYYYMM`).
    User,
    /// Codes for migrant-services case records. Prefix `UKC`, day-granular
    /// date part (`YYYYMMDD`).
    Case,
}

impl CodeNamespace {
    /// The fixed prefix tag identifying this namespace.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::User => "UKU",
            Self::Case => "UKC",
        }
    }

    /// Digit count of the date part.
    fn date_part_len(&self) -> usize {
        match self {
            Self::User => 6,
            Self::Case => 8,
        }
    }

    /// Render the date part for a generation instant (UTC).
    pub fn date_part(&self, at: DateTime<Utc>) -> String {
        match self {
            Self::User => at.format("%Y%m").to_string(),
            Self::Case => at.format("%Y%m%d").to_string(),
        }
    }

    /// Generate a fresh candidate code for this namespace.
    pub fn generate<R: Rng + ?Sized>(&self, at: DateTime<Utc>, rng: &mut R) -> String {
        format!(
            "{}-{}-{}",
            self.prefix(),
            self.date_part(at),
            alphabet::random_suffix(rng)
        )
    }

    /// Structural validation of a presented code against this namespace.
    pub fn matches(&self, code: &str) -> bool {
        self.parse(code).is_some()
    }

    /// Split a presented code into its date part and suffix.
    ///
    /// Returns `None` unless the code has exactly three `-`-separated
    /// parts, the prefix is this namespace's tag, the date part has the
    /// right digit count, and the suffix is 4–6 alphabet characters. The
    /// date part is checked structurally only — codes are opaque tokens,
    /// not timestamps.
    pub fn parse(&self, code: &str) -> Option<CodeParts> {
        let mut parts = code.split('-');
        let prefix = parts.next()?;
        let date_part = parts.next()?;
        let suffix = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        if prefix != self.prefix() {
            return None;
        }
        if date_part.len() != self.date_part_len()
            || !date_part.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }
        if !(MIN_SUFFIX_LEN..=MAX_SUFFIX_LEN).contains(&suffix.len())
            || !suffix.chars().all(alphabet::is_suffix_char)
        {
            return None;
        }

        Some(CodeParts {
            date_part: date_part.to_string(),
            suffix: suffix.to_string(),
        })
    }
}

impl std::fmt::Display for CodeNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Case => write!(f, "case"),
        }
    }
}

/// The variable components of a structurally valid code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeParts {
    /// The `YYYYMM` or `YYYYMMDD` date part.
    pub date_part: String,
    /// The random suffix.
    pub suffix: String,
}

/// Identify which namespace, if any, a presented code belongs to.
pub fn parse_code(code: &str) -> Option<(CodeNamespace, CodeParts)> {
    for ns in [CodeNamespace::User, CodeNamespace::Case] {
        if let Some(parts) = ns.parse(code) {
            return Some((ns, parts));
        }
    }
    None
}
