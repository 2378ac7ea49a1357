//! # TD3 Parser — Fixed-Offset Field Extraction
//!
//! Parses the two-line, 44-character machine-readable zone printed on
//! passport identity pages (ICAO Doc 9303 Part 4, TD3 format).
//!
//! ## Design
//!
//! Fields are extracted by fixed character offset, not by tokenizing: the
//! TD3 layout is a rigidly positioned fixed-width encoding defined by an
//! international standard, so the offsets are contractual.
//!
//! ## Degradation Policy
//!
//! The zone arrives from OCR and is frequently imperfect. The parser has
//! exactly two hard failure conditions — fewer than two input lines, or a
//! first line that does not begin with the passport sentinel `P<` — both of
//! which yield `None` ("could not read document"). Every other defect
//! degrades to an absent field on the record: a garbled date or a truncated
//! second line loses that field, never the whole parse.
//!
//! All whitespace is stripped from each line character-by-character before
//! extraction, including interior whitespace: OCR output carries spurious
//! spaces inside the zone.

use crate::checksum;
use crate::date::MrzDate;
use crate::record::{DocumentType, MrzChecks, MrzRecord, Sex};

/// Nominal length of a TD3 line. Shorter (truncated) lines are tolerated;
/// fields past the end of the data are simply absent.
pub const TD3_LINE_LEN: usize = 44;

/// The two-character marker opening line 1 of a passport zone.
const PASSPORT_SENTINEL: &str = "P<";

/// Parse a TD3 machine-readable zone into an [`MrzRecord`].
///
/// Expects at least two lines; extra lines are ignored. Returns `None`
/// when fewer than two lines are supplied or line 1 does not begin with
/// the passport sentinel — the caller should fall back to manual entry.
/// Never panics, regardless of input content.
pub fn parse_td3<S: AsRef<str>>(lines: &[S]) -> Option<MrzRecord> {
    if lines.len() < 2 {
        return None;
    }
    let line1 = strip_whitespace(lines[0].as_ref());
    let line2 = strip_whitespace(lines[1].as_ref());

    if !line1.starts_with(PASSPORT_SENTINEL) {
        return None;
    }

    let l1: Vec<char> = line1.chars().collect();
    let l2: Vec<char> = line2.chars().collect();

    let issuing_country = non_empty(strip_fillers(&segment(&l1, 2, 5)).to_uppercase());
    let (surname, given_names, full_name) = parse_name_field(&segment(&l1, 5, l1.len()));

    let document_number = non_empty(strip_fillers(&segment(&l2, 0, 9)));
    let nationality = non_empty(strip_fillers(&segment(&l2, 10, 13)).to_uppercase());
    let birth_date = MrzDate::from_mrz_field(&segment(&l2, 13, 19));
    let sex = match l2.get(20) {
        Some('M') => Sex::Male,
        Some('F') => Sex::Female,
        _ => Sex::Unspecified,
    };
    let expiry_date = MrzDate::from_mrz_field(&segment(&l2, 21, 27));
    let personal_number = non_empty(strip_fillers(&segment(&l2, 28, 42)));

    Some(MrzRecord {
        document_type: DocumentType::Passport,
        issuing_country,
        surname,
        given_names,
        full_name,
        document_number,
        nationality,
        birth_date,
        sex,
        expiry_date,
        personal_number,
        checks: compute_checks(&l2),
    })
}

/// Remove every whitespace character, interior ones included.
fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Characters `[start, end)`, clamped to the available data.
fn segment(chars: &[char], start: usize, end: usize) -> String {
    chars
        .iter()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

/// Remove filler characters from a field.
fn strip_fillers(field: &str) -> String {
    field.chars().filter(|c| *c != '<').collect()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Split the name field into surname and given names.
///
/// The double filler `<<` separates the primary identifier (surname) from
/// the secondary identifier (given names). Within the surname, single
/// fillers are stripped; within the given names they become spaces. Both
/// segments then lose any character that is neither alphabetic nor a
/// space, and runs of whitespace collapse to one space.
///
/// Returns `(surname, given_names, full_name)`.
fn parse_name_field(field: &str) -> (Option<String>, Option<String>, Option<String>) {
    let (surname_raw, given_raw) = match field.split_once("<<") {
        Some((surname, given)) => (surname, Some(given)),
        None => (field, None),
    };

    let surname = clean_name(&surname_raw.replace('<', ""));
    let given = given_raw
        .map(|g| clean_name(&g.replace('<', " ")))
        .unwrap_or_default();

    let full_name = format!("{surname} {given}").trim().to_string();

    (non_empty(surname), non_empty(given), non_empty(full_name))
}

/// Drop non-alphabetic, non-space characters and collapse whitespace.
fn clean_name(raw: &str) -> String {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();
    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Evaluate the five TD3 check digits over line 2.
///
/// Each check position sits after the data it covers, so a readable check
/// character implies the covered segment is present in full.
fn compute_checks(l2: &[char]) -> MrzChecks {
    let check_at = |start: usize, end: usize, pos: usize, filler_ok: bool| -> Option<bool> {
        let check = *l2.get(pos)?;
        checksum::verify(&segment(l2, start, end), check, filler_ok)
    };

    let composite = l2.get(43).and_then(|check| {
        let data = format!(
            "{}{}{}",
            segment(l2, 0, 10),
            segment(l2, 13, 20),
            segment(l2, 21, 43)
        );
        checksum::verify(&data, *check, false)
    });

    MrzChecks {
        document_number: check_at(0, 9, 9, false),
        birth_date: check_at(13, 19, 19, false),
        expiry_date: check_at(21, 27, 27, false),
        personal_number: check_at(28, 42, 42, true),
        composite,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(lines: &[&str]) -> Option<MrzRecord> {
        parse_td3(lines)
    }

    // ---- hard failure conditions ----

    #[test]
    fn empty_input_is_none() {
        assert_eq!(parse(&[]), None);
    }

    #[test]
    fn single_line_is_none() {
        assert_eq!(parse(&["P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<"]), None);
    }

    #[test]
    fn non_passport_sentinel_is_none() {
        // TD1-style identity card line.
        assert_eq!(
            parse(&[
                "I<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
                "L898902C36UTO7408122F1204159ZE184226B<<<<<10",
            ]),
            None
        );
    }

    #[test]
    fn plain_p_without_filler_is_none() {
        assert_eq!(parse(&["PXUTO", "L898902C36UTO"]), None);
    }

    // ---- degradation, not failure ----

    #[test]
    fn garbled_second_line_still_parses() {
        let rec = parse(&["P<UTOERIKSSON<<ANNA<<<<<<<<<<<<<<<<<<<<<<<<<", "<<<<"]).unwrap();
        assert_eq!(rec.document_type, DocumentType::Passport);
        assert_eq!(rec.document_number, None);
        assert_eq!(rec.birth_date, None);
        assert_eq!(rec.checks, MrzChecks::default());
    }

    #[test]
    fn truncated_second_line_loses_trailing_fields() {
        // Line 2 cut off after the nationality field.
        let rec = parse(&[
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
            "L898902C36UTO",
        ])
        .unwrap();
        assert_eq!(rec.document_number.as_deref(), Some("L898902C3"));
        assert_eq!(rec.nationality.as_deref(), Some("UTO"));
        assert_eq!(rec.birth_date, None);
        assert_eq!(rec.expiry_date, None);
        assert_eq!(rec.sex, Sex::Unspecified);
        assert_eq!(rec.checks.birth_date, None);
        assert_eq!(rec.checks.composite, None);
    }

    #[test]
    fn malformed_birth_date_blocks() {
        // 5-character block shifts everything; the 6-char window reads
        // "99999F" which is not all digits.
        let base = "L898902C36UTO";
        let rec = parse(&[
            "P<UTOERIKSSON<<ANNA<<<<<<<<<<<<<<<<<<<<<<<<<",
            &format!("{base}99999F"),
        ])
        .unwrap();
        assert_eq!(rec.birth_date, None);

        let rec = parse(&[
            "P<UTOERIKSSON<<ANNA<<<<<<<<<<<<<<<<<<<<<<<<<",
            &format!("{base}AABBCC"),
        ])
        .unwrap();
        assert_eq!(rec.birth_date, None);
    }

    #[test]
    fn out_of_range_birth_date_omitted() {
        let rec = parse(&[
            "P<UTOERIKSSON<<ANNA<<<<<<<<<<<<<<<<<<<<<<<<<",
            "L898902C36UTO7413122F1204159ZE184226B<<<<<10",
        ])
        .unwrap();
        assert_eq!(rec.birth_date, None); // month 13
    }

    // ---- whitespace stripping ----

    #[test]
    fn interior_whitespace_is_stripped() {
        let rec = parse(&[
            "P<UTO ERIKSSON<<ANNA<MARIA<<<<<<<< <<<<<<<<<<<",
            "L898902C3 6UTO74081 22F1204159ZE184226B<<<<<10",
        ])
        .unwrap();
        assert_eq!(rec.surname.as_deref(), Some("ERIKSSON"));
        assert_eq!(rec.document_number.as_deref(), Some("L898902C3"));
        assert_eq!(rec.birth_date.unwrap().to_iso8601(), "1974-08-12");
    }

    // ---- name field ----

    #[test]
    fn name_field_splits_on_double_filler() {
        let rec = parse(&[
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
            "L898902C36UTO7408122F1204159ZE184226B<<<<<10",
        ])
        .unwrap();
        assert_eq!(rec.surname.as_deref(), Some("ERIKSSON"));
        assert_eq!(rec.given_names.as_deref(), Some("ANNA MARIA"));
        assert_eq!(rec.full_name.as_deref(), Some("ERIKSSON ANNA MARIA"));
    }

    #[test]
    fn multi_part_surname_fillers_are_stripped() {
        let rec = parse(&[
            "P<NLDVAN<DER<BERG<<JAN<<<<<<<<<<<<<<<<<<<<<<",
            "XA00000000NLD7408122M1204159<<<<<<<<<<<<<<06",
        ])
        .unwrap();
        assert_eq!(rec.surname.as_deref(), Some("VANDERBERG"));
        assert_eq!(rec.given_names.as_deref(), Some("JAN"));
        assert_eq!(rec.full_name.as_deref(), Some("VANDERBERG JAN"));
    }

    #[test]
    fn name_without_given_segment() {
        let rec = parse(&[
            "P<UTOERIKSSON<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<",
            "L898902C36UTO7408122F1204159ZE184226B<<<<<10",
        ])
        .unwrap();
        assert_eq!(rec.surname.as_deref(), Some("ERIKSSON"));
        assert_eq!(rec.given_names, None);
        assert_eq!(rec.full_name.as_deref(), Some("ERIKSSON"));
    }

    #[test]
    fn non_alphabetic_name_characters_removed() {
        let rec = parse(&[
            "P<UTOER1KSS0N<<ANNA<<<<<<<<<<<<<<<<<<<<<<<<<",
            "L898902C36UTO7408122F1204159ZE184226B<<<<<10",
        ])
        .unwrap();
        // OCR misread digits inside the name are dropped.
        assert_eq!(rec.surname.as_deref(), Some("ERKSSN"));
    }

    // ---- fixed offsets ----

    #[test]
    fn country_and_nationality_uppercased() {
        let rec = parse(&[
            "P<utoERIKSSON<<ANNA<<<<<<<<<<<<<<<<<<<<<<<<<",
            "L898902C36uto7408122F1204159ZE184226B<<<<<10",
        ])
        .unwrap();
        assert_eq!(rec.issuing_country.as_deref(), Some("UTO"));
        assert_eq!(rec.nationality.as_deref(), Some("UTO"));
    }

    #[test]
    fn short_country_code_fillers_stripped() {
        // Germany issues "D<<".
        let rec = parse(&[
            "P<D<<MUSTERMANN<<ERIKA<<<<<<<<<<<<<<<<<<<<<<",
            "C01X00T478D<<6408125F2702283<<<<<<<<<<<<<<<4",
        ])
        .unwrap();
        assert_eq!(rec.issuing_country.as_deref(), Some("D"));
        assert_eq!(rec.nationality.as_deref(), Some("D"));
    }

    #[test]
    fn sex_codes() {
        let line2_with_sex = |s: char| format!("L898902C36UTO7408122{s}1204159ZE184226B<<<<<10");
        let line1 = "P<UTOERIKSSON<<ANNA<<<<<<<<<<<<<<<<<<<<<<<<<";

        let rec = parse(&[line1, &line2_with_sex('M')]).unwrap();
        assert_eq!(rec.sex, Sex::Male);
        let rec = parse(&[line1, &line2_with_sex('F')]).unwrap();
        assert_eq!(rec.sex, Sex::Female);
        let rec = parse(&[line1, &line2_with_sex('<')]).unwrap();
        assert_eq!(rec.sex, Sex::Unspecified);
    }

    #[test]
    fn empty_personal_number_is_none() {
        let rec = parse(&[
            "P<UTOERIKSSON<<ANNA<<<<<<<<<<<<<<<<<<<<<<<<<",
            "L898902C36UTO7408122F1204159<<<<<<<<<<<<<<<0",
        ])
        .unwrap();
        assert_eq!(rec.personal_number, None);
    }

    #[test]
    fn extra_lines_ignored() {
        let rec = parse(&[
            "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<",
            "L898902C36UTO7408122F1204159ZE184226B<<<<<10",
            "JUNK TRAILING LINE",
        ])
        .unwrap();
        assert_eq!(rec.surname.as_deref(), Some("ERIKSSON"));
    }
}
