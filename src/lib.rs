//! # Numhide - Hide numbers in plain text
//!
//! Numhide embeds numeric identifiers (phone numbers, survey ids, metadata
//! tags, post references, proxy ids) invisibly inside arbitrary
//! human-readable text, so a message forwarded through a messaging
//! platform silently carries a machine-decodable payload alongside its
//! visible content.
//!
//! ## Overview
//!
//! - Digits are encoded as 4-bit BCD groups and carried by two invisible
//!   code points, or (for the dense short channel) mapped straight onto a
//!   ten-element invisible digit alphabet
//! - Fields are framed with invisible separators and a 4-bit version tag,
//!   so multiple independent payload **channels** coexist in the same text
//! - A precompiled matcher per channel locates and extracts fields from
//!   noisy surrounding text; absence of a frame is a routine `None`, not
//!   an error
//! - The encoding is steganographic, not cryptographic: anyone who knows
//!   the scheme can decode it
//!
//! ## Example Usage
//!
//! ```rust
//! use numhide::{decode_primary, encode_primary};
//!
//! // Frame a phone number and survey id (formatting is stripped)
//! let fragment = encode_primary("010-1234-5678", "987654");
//!
//! // Embed the invisible fragment anywhere in a visible message
//! let message = format!("이벤트 안내{fragment} 참여해 주세요");
//!
//! // The full message still decodes exactly
//! let decoded = decode_primary(&message).unwrap();
//! assert_eq!(decoded, Some(("01012345678".into(), "987654".into())));
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`]: Invisible bit and digit alphabets, separators
//! - [`bcd`]: Binary-coded-decimal digit codec
//! - [`channel`]: Channel definitions and the generic framer
//! - [`encoder`]: Per-channel framing entry points
//! - [`decoder`]: Pattern location and field extraction
//! - [`ident`]: 128-bit integer / identifier bijection

pub mod alphabet;
pub mod bcd;
pub mod channel;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod ident;

// Re-export commonly used items at the crate root
pub use channel::{Channel, ANON_INVITATION, METADATA, NAVER_POST, PRIMARY, SHORT_DECIMAL};
pub use decoder::{
    decode_anon_invitation, decode_metadata, decode_naver_post, decode_primary,
    decode_short_decimal, PHONE_SENTINEL,
};
pub use encoder::{
    encode_anon_invitation, encode_metadata, encode_naver_post, encode_primary,
    encode_short_decimal, ANON_DUMMY,
};
pub use error::DecodeError;
pub use ident::{
    identifier_from_decimal, identifier_from_int, identifier_to_int, new_identifier,
    new_identifier_as_int, IdentError,
};
