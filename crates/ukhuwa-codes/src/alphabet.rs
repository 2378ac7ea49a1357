//! # Code Suffix Alphabet
//!
//! The 32-character alphabet for code suffixes: ASCII digits and uppercase
//! letters minus the visually ambiguous `0`, `O`, `1`, and `I`. Codes are
//! read aloud over the phone and copied from handwriting, so near-identical
//! glyphs are excluded at generation time.

use rand::Rng;

/// Permitted suffix characters, in value order.
pub const CODE_ALPHABET: &[u8; 32] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Minimum suffix length (inclusive).
pub const MIN_SUFFIX_LEN: usize = 4;

/// Maximum suffix length (inclusive).
pub const MAX_SUFFIX_LEN: usize = 6;

/// Whether a character belongs to the suffix alphabet.
pub fn is_suffix_char(c: char) -> bool {
    c.is_ascii() && CODE_ALPHABET.contains(&(c as u8))
}

/// Draw a random suffix: length uniform in `4..=6`, each character uniform
/// over the alphabet, independently per draw.
pub fn random_suffix<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(MIN_SUFFIX_LEN..=MAX_SUFFIX_LEN);
    (0..len)
        .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}
