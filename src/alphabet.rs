//! Invisible Unicode alphabets used as steganographic carriers.
//!
//! Two alphabets exist:
//! - The **bit alphabet**: two code points standing for binary `0` and `1`,
//!   used together with the BCD codec for all two-field channels.
//! - The **digit alphabet**: ten code points, index i standing for decimal
//!   digit i, used by the short-decimal channel with no bit expansion.
//!
//! The outer separators are invisible as well and never appear inside the
//! bit alphabet, so a frame's bracket structure cannot collide with its
//! payload.

use crate::error::DecodeError;

/// Bit alphabet carrier for binary `0` (zero-width space).
pub const ZERO: char = '\u{200B}';

/// Bit alphabet carrier for binary `1` (zero-width no-break space / BOM).
pub const ONE: char = '\u{FEFF}';

/// Primary outer separator (zero-width joiner).
pub const SEP: char = '\u{200D}';

/// Secondary outer separator (zero-width non-joiner).
///
/// All encoders frame with this separator; only the primary channel's
/// decoder additionally accepts [`SEP`].
pub const SEP2: char = '\u{200C}';

/// The ten-element digit alphabet: index i encodes decimal digit i.
pub const DIGIT_ALPHABET: [char; 10] = [
    '\u{200B}', // zero-width space
    '\u{200C}', // zero-width non-joiner
    '\u{200D}', // zero-width joiner
    '\u{200E}', // left-to-right mark
    '\u{200F}', // right-to-left mark
    '\u{202C}', // pop directional formatting
    '\u{FEFF}', // zero-width no-break space
    '\u{2060}', // word joiner
    '\u{2063}', // invisible separator
    '\u{180E}', // mongolian vowel separator
];

/// Substitutes each binary symbol by its invisible carrier.
pub fn bits_to_invisible(bits: &str) -> String {
    bits.chars()
        .map(|c| match c {
            '0' => ZERO,
            '1' => ONE,
            other => other,
        })
        .collect()
}

/// Inverse of [`bits_to_invisible`]. Characters outside the bit alphabet
/// pass through unchanged and are rejected later by the BCD decoder.
pub fn invisible_to_bits(seq: &str) -> String {
    seq.chars()
        .map(|c| match c {
            ZERO => '0',
            ONE => '1',
            other => other,
        })
        .collect()
}

/// Substitutes each decimal digit by its indexed invisible carrier.
/// Non-digit characters are discarded.
pub fn digits_to_invisible(digits: &str) -> String {
    digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGIT_ALPHABET[d as usize])
        .collect()
}

/// Looks up each code point's index in the digit alphabet.
///
/// Fails with [`DecodeError::UnknownSymbol`] if any code point is not one
/// of the ten carriers.
pub fn invisible_to_digits(seq: &str) -> Result<String, DecodeError> {
    seq.chars()
        .map(|c| {
            DIGIT_ALPHABET
                .iter()
                .position(|&e| e == c)
                .map(|i| char::from(b'0' + i as u8))
                .ok_or(DecodeError::UnknownSymbol(c))
        })
        .collect()
}
