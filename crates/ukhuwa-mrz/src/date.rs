//! # MRZ Dates — Calendar-Blind Date Type
//!
//! Defines [`MrzDate`], the date type used for the birth and expiry fields
//! of a machine-readable zone.
//!
//! ## Why not `chrono::NaiveDate`
//!
//! MRZ date fields are validated by range only: month in `[1,12]`, day in
//! `[1,31]`. There is no month-length or leap-year check — a zone carrying
//! `740231` decodes to `1974-02-31` and downstream consumers re-validate
//! against other identity sources. A calendar-aware type cannot represent
//! such values, so `MrzDate` stores the three components directly and
//! applies the range rule as stated.
//!
//! ## Two-Digit Year Pivot
//!
//! MRZ years are two digits. Expansion uses a fixed pivot: `yy >= 50` maps
//! to the 1900s, otherwise the 2000s. The same rule is applied to birth and
//! expiry dates; expiry dates beyond 2049 are outside the representable
//! horizon.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Two-digit years at or above this value expand to the 1900s.
const CENTURY_PIVOT: u8 = 50;

/// A date out of the permitted component ranges.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("date components out of range: {year:04}-{month:02}-{day:02}")]
pub struct MrzDateError {
    /// Year component as supplied.
    pub year: u16,
    /// Month component as supplied.
    pub month: u8,
    /// Day component as supplied.
    pub day: u8,
}

/// A range-validated, calendar-blind date.
///
/// Renders and serializes as ISO 8601 `YYYY-MM-DD`. Ordering is
/// lexicographic over `(year, month, day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MrzDate {
    year: u16,
    month: u8,
    day: u8,
}

impl MrzDate {
    /// Create a date from components.
    ///
    /// # Errors
    ///
    /// Returns [`MrzDateError`] if the year exceeds 9999, the month is not
    /// in `[1,12]`, or the day is not in `[1,31]`. Deliberately does NOT
    /// check the day against the month's actual length.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, MrzDateError> {
        if year > 9999 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(MrzDateError { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Decode a 6-character `YYMMDD` MRZ field.
    ///
    /// Returns `None` unless the field is exactly 6 ASCII digits with the
    /// month and day in range. The two-digit year expands via the fixed
    /// pivot (>= 50 → 1900s, otherwise 2000s).
    pub fn from_mrz_field(field: &str) -> Option<Self> {
        if field.len() != 6 || !field.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let yy: u8 = field[0..2].parse().ok()?;
        let month: u8 = field[2..4].parse().ok()?;
        let day: u8 = field[4..6].parse().ok()?;

        let year = if yy >= CENTURY_PIVOT {
            1900 + u16::from(yy)
        } else {
            2000 + u16::from(yy)
        };

        Self::new(year, month, day).ok()
    }

    /// Year component (four digits).
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month component, `1..=12`.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day component, `1..=31`, not validated against the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Render as ISO 8601 `YYYY-MM-DD`.
    pub fn to_iso8601(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Display for MrzDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl std::str::FromStr for MrzDate {
    type Err = MrzDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MrzDateError {
            year: 0,
            month: 0,
            day: 0,
        };
        let mut parts = s.splitn(3, '-');
        let year = parts.next().ok_or_else(invalid)?;
        let month = parts.next().ok_or_else(invalid)?;
        let day = parts.next().ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(invalid());
        }
        let year: u16 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let day: u8 = day.parse().map_err(|_| invalid())?;
        Self::new(year, month, day)
    }
}

impl Serialize for MrzDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for MrzDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
