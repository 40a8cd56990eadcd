//! Error types for the decode path.

use thiserror::Error;

/// Errors that can occur while decoding an already-located field.
///
/// Absence of a frame in host text is NOT an error - it is the routine
/// outcome for any message that simply carries no payload, and the decode
/// entry points model it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A bit-coded field whose length or group values fall outside BCD.
    #[error("malformed bit-coded field: {0}")]
    MalformedInput(String),

    /// A code point outside the ten-element digit alphabet.
    #[error("character {0:?} is not in the digit alphabet")]
    UnknownSymbol(char),
}
