//! Channel definitions and the generic framer.
//!
//! A channel is one independently-decodable payload kind. Each channel
//! carries a unique 4-bit version tag, a field count, and an alphabet
//! choice; framing and pattern construction are one generic algorithm
//! parameterized over the channel value, so no payload kind needs its own
//! encode/decode routine.
//!
//! Frame layout:
//!
//! ```text
//! SEP2 + versionTag + SEP2 + field1 + SEP2 [+ field2 + SEP2]
//! ```
//!
//! Frames can sit at any position inside arbitrary host text. Invisible
//! code points never collide with visible text, and version tags never
//! collide across channels, so a scan cannot misattribute one channel's
//! frame to another.

use crate::alphabet::{self, DIGIT_ALPHABET, ONE, SEP2, ZERO};
use crate::bcd;

/// Which invisible alphabet a channel's fields use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// BCD bit groups carried by the two-element bit alphabet.
    Bits,
    /// Decimal digits carried directly by the ten-element digit alphabet.
    Digits,
}

/// How many fields a channel's frame carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fields {
    One,
    Two,
}

/// One payload channel: a named encoding/decoding contract.
#[derive(Debug)]
pub struct Channel {
    /// Human-readable channel name (used in diagnostics only).
    pub name: &'static str,
    /// 4-bit version tag, unique among all channels.
    pub version: u8,
    pub fields: Fields,
    pub alphabet: Alphabet,
}

/// Phone number + survey id.
pub static PRIMARY: Channel = Channel {
    name: "primary",
    version: 0b0001,
    fields: Fields::Two,
    alphabet: Alphabet::Bits,
};

/// Metadata type number + record uid.
pub static METADATA: Channel = Channel {
    name: "metadata",
    version: 0b0010,
    fields: Fields::Two,
    alphabet: Alphabet::Bits,
};

/// Naver post number + referrer tracking id.
pub static NAVER_POST: Channel = Channel {
    name: "naver-post",
    version: 0b0011,
    fields: Fields::Two,
    alphabet: Alphabet::Bits,
};

/// Anonymous-invitation proxy id + fixed dummy field.
pub static ANON_INVITATION: Channel = Channel {
    name: "anon-invitation",
    version: 0b0100,
    fields: Fields::Two,
    alphabet: Alphabet::Bits,
};

/// Single decimal field in the dense digit alphabet, short enough for QR
/// payloads.
pub static SHORT_DECIMAL: Channel = Channel {
    name: "short-decimal",
    version: 0b0101,
    fields: Fields::One,
    alphabet: Alphabet::Digits,
};

impl Channel {
    pub fn field_count(&self) -> usize {
        match self.fields {
            Fields::One => 1,
            Fields::Two => 2,
        }
    }

    /// The version tag rendered in the bit alphabet, big-endian.
    pub fn version_tag(&self) -> String {
        (0..4)
            .rev()
            .map(|shift| if self.version >> shift & 1 == 1 { ONE } else { ZERO })
            .collect()
    }

    /// Encodes one already-cleaned digit field into this channel's
    /// alphabet.
    fn encode_field(&self, digits: &str) -> String {
        match self.alphabet {
            Alphabet::Bits => alphabet::bits_to_invisible(&bcd::encode_digits(digits)),
            Alphabet::Digits => alphabet::digits_to_invisible(digits),
        }
    }

    /// Builds the full frame for this channel's fields.
    ///
    /// Frames always use the secondary separator; the primary channel's
    /// decoder accepts either separator, the others only this one.
    pub fn frame(&self, fields: &[&str]) -> String {
        debug_assert_eq!(fields.len(), self.field_count());

        let mut out = String::new();
        out.push(SEP2);
        out.push_str(&self.version_tag());
        out.push(SEP2);
        for field in fields {
            out.push_str(&self.encode_field(field));
            out.push(SEP2);
        }
        out
    }

    /// The regex pattern locating this channel's frame under the given
    /// separator. Capture groups hold the raw invisible field text.
    pub(crate) fn pattern(&self, sep: char) -> String {
        let class = match self.alphabet {
            Alphabet::Bits => format!("[{ZERO}{ONE}]"),
            Alphabet::Digits => {
                let elements: String = DIGIT_ALPHABET.iter().collect();
                format!("[{elements}]")
            }
        };
        let tag = self.version_tag();
        match self.fields {
            Fields::One => format!("{sep}{tag}{sep}({class}+){sep}"),
            Fields::Two => format!("{sep}{tag}{sep}({class}+){sep}({class}+){sep}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::SEP;

    const ALL: [&Channel; 5] = [
        &PRIMARY,
        &METADATA,
        &NAVER_POST,
        &ANON_INVITATION,
        &SHORT_DECIMAL,
    ];

    #[test]
    fn test_version_tags_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.version, b.version, "{} vs {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn test_version_tag_rendering() {
        let expected: String = [ZERO, ZERO, ZERO, ONE].iter().collect();
        assert_eq!(PRIMARY.version_tag(), expected);

        let expected: String = [ZERO, ONE, ZERO, ONE].iter().collect();
        assert_eq!(SHORT_DECIMAL.version_tag(), expected);
    }

    #[test]
    fn test_frame_structure() {
        let frame = PRIMARY.frame(&["01012345678", "987654"]);

        // SEP2 brackets the tag and terminates each field
        assert!(frame.starts_with(SEP2));
        assert!(frame.ends_with(SEP2));
        assert_eq!(frame.chars().filter(|&c| c == SEP2).count(), 4);

        // Everything in the frame is invisible
        assert!(frame.chars().all(|c| c == SEP2 || c == ZERO || c == ONE));
    }

    #[test]
    fn test_frame_never_uses_primary_separator() {
        let frame = PRIMARY.frame(&["010", "42"]);
        assert!(!frame.contains(SEP));
    }

    #[test]
    fn test_short_decimal_frame_has_no_bit_expansion() {
        // One carrier per digit, not four
        let frame = SHORT_DECIMAL.frame(&["987654"]);
        // SEP2 + 4 tag chars + SEP2 + 6 digit chars + SEP2
        assert_eq!(frame.chars().count(), 13);
    }
}
