//! Binary-coded-decimal digit codec.
//!
//! Each decimal digit becomes one 4-bit big-endian group, so a bit string
//! is always four times the length of the digit string it encodes. Group
//! values 10-15 are never produced and are rejected on decode.

use crate::error::DecodeError;

/// Derives a digit string from arbitrary input by discarding every
/// non-digit character (`"010-1234-5678"` becomes `"01012345678"`).
pub fn clean_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Encodes each digit as a 4-bit big-endian group and concatenates.
///
/// Defined for digit strings of any length, including empty. Non-digit
/// characters are skipped, which makes this total over arbitrary input.
pub fn encode_digits(digits: &str) -> String {
    let mut bits = String::with_capacity(digits.len() * 4);
    for value in digits.chars().filter_map(|c| c.to_digit(10)) {
        for shift in (0..4).rev() {
            bits.push(if value >> shift & 1 == 1 { '1' } else { '0' });
        }
    }
    bits
}

/// Partitions a bit string into 4-bit groups and recovers the digits.
///
/// Fails with [`DecodeError::MalformedInput`] when the length is not a
/// multiple of 4, when a symbol is not binary, or when a group value
/// exceeds 9.
pub fn decode_digits(bits: &str) -> Result<String, DecodeError> {
    if bits.len() % 4 != 0 {
        return Err(DecodeError::MalformedInput(format!(
            "bit length {} is not a multiple of 4",
            bits.len()
        )));
    }

    let mut digits = String::with_capacity(bits.len() / 4);
    for group in bits.as_bytes().chunks(4) {
        let mut value = 0u8;
        for &symbol in group {
            value <<= 1;
            match symbol {
                b'0' => {}
                b'1' => value |= 1,
                other => {
                    return Err(DecodeError::MalformedInput(format!(
                        "unexpected symbol {:?} in bit string",
                        char::from(other)
                    )))
                }
            }
        }
        if value > 9 {
            return Err(DecodeError::MalformedInput(format!(
                "bit group value {value} is outside the decimal range"
            )));
        }
        digits.push(char::from(b'0' + value));
    }

    Ok(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_digits_strips_formatting() {
        assert_eq!(clean_digits("010-1234-5678"), "01012345678");
        assert_eq!(clean_digits("no digits here"), "");
        assert_eq!(clean_digits("987654"), "987654");
    }

    #[test]
    fn test_encode_known_groups() {
        assert_eq!(encode_digits("0"), "0000");
        assert_eq!(encode_digits("9"), "1001");
        assert_eq!(encode_digits("05"), "00000101");
        assert_eq!(encode_digits(""), "");
    }

    #[test]
    fn test_roundtrip_every_digit() {
        let digits = "0123456789";
        let bits = encode_digits(digits);
        assert_eq!(bits.len(), digits.len() * 4);
        assert_eq!(decode_digits(&bits).unwrap(), digits);
    }

    #[test]
    fn test_roundtrip_phone_number() {
        let digits = "01012345678";
        assert_eq!(decode_digits(&encode_digits(digits)).unwrap(), digits);
    }

    #[test]
    fn test_decode_rejects_ragged_length() {
        let err = decode_digits("00010").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedInput(_)));
    }

    #[test]
    fn test_decode_rejects_group_above_nine() {
        // 1010 = 10, outside the BCD domain
        let err = decode_digits("1010").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedInput(_)));
    }

    #[test]
    fn test_decode_rejects_non_binary_symbol() {
        let err = decode_digits("00x1").unwrap_err();
        assert!(matches!(err, DecodeError::MalformedInput(_)));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_digits("").unwrap(), "");
    }
}
