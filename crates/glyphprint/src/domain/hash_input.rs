//! Hash input parsing and windowed segment hashing
//!
//! This module validates the 64-character hex input, decodes it to 32 bytes
//! and provides the segment hash every drawing parameter is derived from.

use crate::constants::{HASH_BYTES, HASH_HEX_LEN, SEGMENT_MULTIPLIER, SEGMENT_SEED};
use thiserror::Error;

/// Input validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input does not have exactly 64 characters
    #[error("Invalid hash length: expected {expected} hex characters, found {found}", expected = HASH_HEX_LEN)]
    InvalidLength { found: usize },
    /// Input contains a non-hex character
    #[error("Invalid hash character {found:?} at position {position}")]
    InvalidCharacter { position: usize, found: char },
}

/// Decoded 32-byte input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HashInput {
    bytes: [u8; HASH_BYTES],
}

impl HashInput {
    /// Parse a 64-character hex string (case-insensitive)
    pub fn parse(hex: &str) -> Result<Self, ValidationError> {
        validate_hex(hex)?;

        let mut bytes = [0u8; HASH_BYTES];
        for (i, b) in bytes.iter_mut().enumerate() {
            // Groups are pre-validated; a malformed group would decode to 0.
            *b = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).unwrap_or(0);
        }

        Ok(Self { bytes })
    }

    /// Create an input directly from bytes
    pub fn from_bytes(bytes: [u8; HASH_BYTES]) -> Self {
        Self { bytes }
    }

    /// Raw bytes
    pub fn bytes(&self) -> &[u8; HASH_BYTES] {
        &self.bytes
    }

    /// Lowercase hex representation
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }

    /// Windowed segment hash over `[start, start + length)`
    ///
    /// Starts at 5381 and accumulates `acc * 33 + byte` with 32-bit
    /// wraparound. The range is clipped to the input bounds.
    pub fn hash_segment(&self, start: usize, length: usize) -> u32 {
        let end = start.saturating_add(length).min(HASH_BYTES);
        let start = start.min(end);

        self.bytes[start..end].iter().fold(SEGMENT_SEED, |acc, &b| {
            acc.wrapping_mul(SEGMENT_MULTIPLIER).wrapping_add(b as u32)
        })
    }

    /// Marker existence bit for slot `i` (bit `i & 7` of byte `i >> 3`)
    #[inline]
    pub fn marker_bit(&self, i: usize) -> bool {
        (self.bytes[i >> 3] >> (i & 7)) & 1 == 1
    }
}

impl std::str::FromStr for HashInput {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Check that `hex` is exactly 64 hex characters
pub fn validate_hex(hex: &str) -> Result<(), ValidationError> {
    let found = hex.chars().count();
    if found != HASH_HEX_LEN {
        return Err(ValidationError::InvalidLength { found });
    }

    if let Some((position, found)) = hex.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidCharacter { position, found });
    }

    Ok(())
}
