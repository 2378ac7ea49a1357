//! End-to-end parse of the published ICAO Doc 9303 TD3 specimen, plus the
//! record's JSON shape as consumed by the intake flow.

use ukhuwa_mrz::{parse_td3, DocumentType, Sex};

const SPECIMEN_LINE_1: &str = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
const SPECIMEN_LINE_2: &str = "L898902C36UTO7408122F1204159ZE184226B<<<<<10";

#[test]
fn icao_specimen_full_record() {
    let rec = parse_td3(&[SPECIMEN_LINE_1, SPECIMEN_LINE_2]).expect("specimen parses");

    assert_eq!(rec.document_type, DocumentType::Passport);
    assert_eq!(rec.issuing_country.as_deref(), Some("UTO"));
    assert_eq!(rec.surname.as_deref(), Some("ERIKSSON"));
    assert_eq!(rec.given_names.as_deref(), Some("ANNA MARIA"));
    assert_eq!(rec.full_name.as_deref(), Some("ERIKSSON ANNA MARIA"));
    assert_eq!(rec.document_number.as_deref(), Some("L898902C3"));
    assert_eq!(rec.nationality.as_deref(), Some("UTO"));
    assert_eq!(rec.birth_date.unwrap().to_iso8601(), "1974-08-12");
    assert_eq!(rec.sex, Sex::Female);
    assert_eq!(rec.expiry_date.unwrap().to_iso8601(), "2012-04-15");
    assert_eq!(rec.personal_number.as_deref(), Some("ZE184226B"));
}

#[test]
fn icao_specimen_check_digits_all_pass() {
    let rec = parse_td3(&[SPECIMEN_LINE_1, SPECIMEN_LINE_2]).unwrap();

    assert_eq!(rec.checks.document_number, Some(true));
    assert_eq!(rec.checks.birth_date, Some(true));
    assert_eq!(rec.checks.expiry_date, Some(true));
    assert_eq!(rec.checks.personal_number, Some(true));
    assert_eq!(rec.checks.composite, Some(true));
    assert!(rec.checks.all_passed());
}

#[test]
fn tampered_document_number_fails_its_check() {
    // Flip one digit of the document number; its check digit and the
    // composite both break, while the date checks still pass.
    let tampered = "L898903C36UTO7408122F1204159ZE184226B<<<<<10";
    let rec = parse_td3(&[SPECIMEN_LINE_1, tampered]).unwrap();

    assert_eq!(rec.checks.document_number, Some(false));
    assert_eq!(rec.checks.birth_date, Some(true));
    assert_eq!(rec.checks.composite, Some(false));
    assert!(!rec.checks.all_passed());
}

#[test]
fn record_serializes_with_iso_dates_and_without_absent_fields() {
    let rec = parse_td3(&[SPECIMEN_LINE_1, SPECIMEN_LINE_2]).unwrap();
    let json = serde_json::to_value(&rec).unwrap();

    assert_eq!(json["document_type"], "passport");
    assert_eq!(json["birth_date"], "1974-08-12");
    assert_eq!(json["expiry_date"], "2012-04-15");
    assert_eq!(json["sex"], "female");

    // Absent fields are omitted, not null.
    let rec = parse_td3(&[SPECIMEN_LINE_1, "<<<<"]).unwrap();
    let json = serde_json::to_value(&rec).unwrap();
    assert!(json.get("document_number").is_none());
    assert!(json.get("birth_date").is_none());
}
