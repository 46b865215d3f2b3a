//! PHash type and formatting

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Number of hex digits in a rendered hash
pub const HEX_WIDTH: usize = 16;

/// A perceptual hash represented as a 64-bit value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PHash(pub u64);

impl PHash {
    /// Get the underlying 64-bit hash value
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Render as 16 lowercase, zero-padded hex digits
    pub fn to_hex(&self) -> String {
        format!("{:016x}", self.0)
    }
}

impl From<u64> for PHash {
    fn from(value: u64) -> Self {
        PHash(value)
    }
}

impl From<PHash> for u64 {
    fn from(hash: PHash) -> Self {
        hash.0
    }
}

impl fmt::Display for PHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::LowerHex for PHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for PHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // from_str_radix alone would accept a sign and short input
        if s.len() != HEX_WIDTH || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHash(s.to_string()));
        }

        u64::from_str_radix(s, 16)
            .map(PHash)
            .map_err(|_| Error::InvalidHash(s.to_string()))
    }
}
