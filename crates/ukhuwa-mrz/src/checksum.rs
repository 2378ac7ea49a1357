//! # MRZ Check Digits
//!
//! ICAO Doc 9303 check digit computation: each character maps to a numeric
//! value (`0`-`9` → 0–9, `A`-`Z` → 10–35, filler `<` → 0), values are
//! weighted by the repeating sequence 7, 3, 1, and the check digit is the
//! sum modulo 10.

/// Repeating weight sequence for check digit computation.
const WEIGHTS: [u32; 3] = [7, 3, 1];

/// Numeric value of an MRZ character, or `None` for characters outside the
/// MRZ repertoire.
fn char_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        '<' => Some(0),
        _ => None,
    }
}

/// Compute the check digit over a field.
///
/// Returns `None` if any character is outside the MRZ repertoire.
pub fn check_digit(field: &str) -> Option<u8> {
    let mut sum: u32 = 0;
    for (i, c) in field.chars().enumerate() {
        sum += char_value(c)? * WEIGHTS[i % 3];
    }
    Some((sum % 10) as u8)
}

/// Verify a field against its check character.
///
/// The check character must be an ASCII digit, or — when `filler_ok` is
/// set — the filler `<`, which stands for 0 on optional fields that are
/// entirely absent. Returns `None` when the field or check character is
/// unreadable, `Some(bool)` otherwise.
pub fn verify(field: &str, check: char, filler_ok: bool) -> Option<bool> {
    let expected = match check {
        '0'..='9' => check as u8 - b'0',
        '<' if filler_ok => 0,
        _ => return None,
    };
    Some(check_digit(field)? == expected)
}
