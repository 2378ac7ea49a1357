//! # ukhuwa-mrz — TD3 Machine-Readable-Zone Parser
//!
//! Parses the two-line machine-readable zone on passport identity pages
//! (ICAO Doc 9303 Part 4, TD3 format) into structured identity fields for
//! the Ukhuwa document-intake flow.
//!
//! ## Design
//!
//! - **Fixed offsets, not tokenizing.** TD3 is a fixed-width encoding with
//!   contractual character positions.
//! - **Degrade, don't throw.** OCR input is dirty; individual malformed
//!   fields are dropped from the record rather than failing the parse.
//!   Only a missing second line or a missing `P<` sentinel rejects the
//!   document outright.
//! - **Calendar-blind dates.** MRZ date validation is range-only by
//!   contract; [`MrzDate`] preserves that rule instead of silently
//!   tightening it to a real calendar.
//! - **Check digits are advisory.** The 7-3-1 check digits are computed
//!   and reported, never enforced.
//!
//! ## Example
//!
//! ```
//! use ukhuwa_mrz::{parse_td3, DocumentType};
//!
//! let record = parse_td3(&[
//!     "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
//!     "L898902C36UTO7408122F1204159ZE184226B<<<<<10",
//! ])
//! .expect("readable zone");
//!
//! assert_eq!(record.document_type, DocumentType::Passport);
//! assert_eq!(record.surname.as_deref(), Some("ERIKSSON"));
//! assert_eq!(record.birth_date.unwrap().to_iso8601(), "1974-08-12");
//! ```

pub mod checksum;
pub mod date;
pub mod record;
pub mod td3;

pub use date::{MrzDate, MrzDateError};
pub use record::{DocumentType, MrzChecks, MrzRecord, Sex};
pub use td3::{parse_td3, TD3_LINE_LEN};
