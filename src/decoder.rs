//! Pattern location and field decoding.
//!
//! Each channel owns a precompiled matcher built from its separator, its
//! literal version-tag sequence, and one capture group per field. Matchers
//! live in `LazyLock` statics: compiled once on first use, immutable, and
//! safe for unlimited concurrent readers.
//!
//! Two outcomes are deliberately kept apart:
//! - `Ok(None)` — no frame of the requested channel exists in the text.
//!   This is routine; most messages carry no payload.
//! - `Err(DecodeError)` — a frame was located but its fields do not decode.
//!   This indicates corruption or a foreign producer and is surfaced.
//!
//! The primary channel is special twice over: it is searched under both
//! separators (tolerating hosts that mangle the primary separator), and on
//! a complete miss it falls back to the short-decimal channel, reporting
//! the fixed [`PHONE_SENTINEL`] in place of the phone number.

use std::sync::LazyLock;

use regex::Regex;

use crate::alphabet::{self, SEP, SEP2};
use crate::bcd;
use crate::channel::{ANON_INVITATION, METADATA, NAVER_POST, PRIMARY, SHORT_DECIMAL};
use crate::error::DecodeError;

/// Placeholder phone value returned when the short-decimal fallback
/// supplies the survey id but no phone number is present.
pub const PHONE_SENTINEL: &str = "00000000000";

static PRIMARY_FINDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&PRIMARY.pattern(SEP)).expect("channel pattern compiles"));
static PRIMARY_FINDER2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&PRIMARY.pattern(SEP2)).expect("channel pattern compiles"));
static METADATA_FINDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&METADATA.pattern(SEP2)).expect("channel pattern compiles"));
static NAVER_POST_FINDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&NAVER_POST.pattern(SEP2)).expect("channel pattern compiles"));
static ANON_INVITATION_FINDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&ANON_INVITATION.pattern(SEP2)).expect("channel pattern compiles"));
static SHORT_DECIMAL_FINDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&SHORT_DECIMAL.pattern(SEP2)).expect("channel pattern compiles"));

/// Leftmost two-field match, raw invisible capture text.
fn locate_pair<'t>(finder: &Regex, text: &'t str) -> Option<(&'t str, &'t str)> {
    let caps = finder.captures(text)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Leftmost single-field match, raw invisible capture text.
fn locate_single<'t>(finder: &Regex, text: &'t str) -> Option<&'t str> {
    let caps = finder.captures(text)?;
    Some(caps.get(1)?.as_str())
}

/// Decodes one bit-alphabet field back to its digit string.
fn decode_bit_field(raw: &str) -> Result<String, DecodeError> {
    bcd::decode_digits(&alphabet::invisible_to_bits(raw))
}

fn decode_pair(finder: &Regex, text: &str) -> Result<Option<(String, String)>, DecodeError> {
    match locate_pair(finder, text) {
        Some((raw1, raw2)) => Ok(Some((decode_bit_field(raw1)?, decode_bit_field(raw2)?))),
        None => Ok(None),
    }
}

/// Extracts phone number and survey id from host text.
///
/// Tries the primary-separator matcher first, then the secondary; if
/// neither frame exists, falls back to [`decode_short_decimal`], so a text
/// carrying only a short survey-id frame still yields its survey id (with
/// [`PHONE_SENTINEL`] standing in for the phone number).
pub fn decode_primary(text: &str) -> Result<Option<(String, String)>, DecodeError> {
    let located =
        locate_pair(&PRIMARY_FINDER, text).or_else(|| locate_pair(&PRIMARY_FINDER2, text));

    match located {
        Some((raw1, raw2)) => Ok(Some((decode_bit_field(raw1)?, decode_bit_field(raw2)?))),
        None => decode_short_decimal(text),
    }
}

/// Extracts metadata type number and record uid. No fallback.
pub fn decode_metadata(text: &str) -> Result<Option<(String, String)>, DecodeError> {
    decode_pair(&METADATA_FINDER, text)
}

/// Extracts Naver post number and referrer tracking id. No fallback.
pub fn decode_naver_post(text: &str) -> Result<Option<(String, String)>, DecodeError> {
    decode_pair(&NAVER_POST_FINDER, text)
}

/// Extracts the anonymous-invitation proxy id and its dummy field. No
/// fallback.
pub fn decode_anon_invitation(text: &str) -> Result<Option<(String, String)>, DecodeError> {
    decode_pair(&ANON_INVITATION_FINDER, text)
}

/// Extracts the short-decimal channel's single field.
///
/// Returned as `(PHONE_SENTINEL, digits)` so the result shape matches
/// [`decode_primary`], whose fallback this is.
pub fn decode_short_decimal(text: &str) -> Result<Option<(String, String)>, DecodeError> {
    match locate_single(&SHORT_DECIMAL_FINDER, text) {
        Some(raw) => {
            let digits = alphabet::invisible_to_digits(raw)?;
            Ok(Some((PHONE_SENTINEL.to_string(), digits)))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{
        encode_anon_invitation, encode_metadata, encode_naver_post, encode_primary,
        encode_short_decimal,
    };

    #[test]
    fn test_primary_roundtrip() {
        let frame = encode_primary("01012345678", "987654");
        let decoded = decode_primary(&frame).unwrap();
        assert_eq!(decoded, Some(("01012345678".into(), "987654".into())));
    }

    #[test]
    fn test_primary_accepts_either_separator() {
        let frame = encode_primary("01099998888", "42");

        // Bit-alphabet frames contain no separator characters in their
        // fields, so swapping the outer separator is a pure reframe.
        let reframed: String = frame
            .chars()
            .map(|c| if c == SEP2 { SEP } else { c })
            .collect();

        let decoded = decode_primary(&reframed).unwrap();
        assert_eq!(decoded, Some(("01099998888".into(), "42".into())));
    }

    #[test]
    fn test_primary_falls_back_to_short_decimal() {
        let frame = encode_short_decimal("987654");
        let decoded = decode_primary(&frame).unwrap();
        assert_eq!(decoded, Some((PHONE_SENTINEL.into(), "987654".into())));
    }

    #[test]
    fn test_absent_frame_is_none_not_error() {
        assert_eq!(decode_primary("plain text, no payload").unwrap(), None);
        assert_eq!(decode_metadata("").unwrap(), None);
        assert_eq!(decode_naver_post("다른 채널 없음").unwrap(), None);
    }

    #[test]
    fn test_channel_isolation() {
        // A metadata frame must not satisfy any other channel's query.
        let text = format!("공지사항{}입니다", encode_metadata("3", "4021"));

        assert_eq!(decode_primary(&text).unwrap(), None);
        assert_eq!(decode_naver_post(&text).unwrap(), None);
        assert_eq!(decode_anon_invitation(&text).unwrap(), None);
        assert_eq!(
            decode_metadata(&text).unwrap(),
            Some(("3".into(), "4021".into()))
        );
    }

    #[test]
    fn test_metadata_roundtrip() {
        let frame = encode_metadata("7", "900012");
        let decoded = decode_metadata(&frame).unwrap();
        assert_eq!(decoded, Some(("7".into(), "900012".into())));
    }

    #[test]
    fn test_naver_post_roundtrip() {
        let frame = encode_naver_post("22310", "507");
        let decoded = decode_naver_post(&frame).unwrap();
        assert_eq!(decoded, Some(("22310".into(), "507".into())));
    }

    #[test]
    fn test_anon_invitation_carries_dummy_field() {
        let frame = encode_anon_invitation("8812");
        let decoded = decode_anon_invitation(&frame).unwrap();
        assert_eq!(decoded, Some(("8812".into(), "175".into())));
    }

    #[test]
    fn test_short_decimal_roundtrip_all_digits() {
        let frame = encode_short_decimal("0123456789");
        let decoded = decode_short_decimal(&frame).unwrap();
        assert_eq!(decoded, Some((PHONE_SENTINEL.into(), "0123456789".into())));
    }

    #[test]
    fn test_first_frame_wins() {
        let first = encode_primary("01011112222", "1");
        let second = encode_primary("01033334444", "2");
        let text = format!("앞{first}중간{second}뒤");

        let decoded = decode_primary(&text).unwrap();
        assert_eq!(decoded, Some(("01011112222".into(), "1".into())));
    }
}
