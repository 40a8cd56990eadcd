//! Integer / identifier bijection.
//!
//! A 128-bit identifier and a `u128` are the same bit pattern; no hashing
//! is involved, so the conversion is total in both directions. Callers
//! holding stringly-typed numbers (query parameters, message fields) go
//! through [`identifier_from_decimal`], which is where the range check
//! lives.

use thiserror::Error;
use uuid::Uuid;

/// Errors from the identifier conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentError {
    /// Value is negative, non-numeric, or exceeds 2^128 - 1.
    #[error("{0:?} is not a non-negative integer within the 128-bit range")]
    OutOfRange(String),
}

/// Returns the identifier whose 128-bit value equals `n` exactly.
pub fn identifier_from_int(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Inverse of [`identifier_from_int`]; always defined.
pub fn identifier_to_int(id: Uuid) -> u128 {
    id.as_u128()
}

/// Parses a decimal string into an identifier.
///
/// Fails with [`IdentError::OutOfRange`] when the string is not a
/// non-negative integer in `[0, 2^128 - 1]`.
pub fn identifier_from_decimal(value: &str) -> Result<Uuid, IdentError> {
    let trimmed = value.trim();
    let n: u128 = trimmed
        .parse()
        .map_err(|_| IdentError::OutOfRange(trimmed.to_string()))?;
    Ok(Uuid::from_u128(n))
}

/// Generates a fresh random (v4) identifier for tagging encoded payloads.
pub fn new_identifier() -> Uuid {
    Uuid::new_v4()
}

/// Random identifier as its integer value.
pub fn new_identifier_as_int() -> u128 {
    new_identifier().as_u128()
}
