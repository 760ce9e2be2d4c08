//! Byte order applied by a codec instance to every multi-byte conversion.
//!
//! Uses ABCD notation for 32-bit values, where A is the most significant
//! byte. For `0x12345678`:
//! - `BigEndian (ABCD)`: `[0x12, 0x34, 0x56, 0x78]`
//! - `LittleEndian (DCBA)`: `[0x78, 0x56, 0x34, 0x12]`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Endianness of multi-byte values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// Most significant byte first (network byte order).
    #[default]
    BigEndian,
    /// Least significant byte first (x86, ARM Cortex-M, AVR).
    LittleEndian,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown byte order '{input}' (expected BE/LE, ABCD/DCBA)")]
pub struct ParseByteOrderError {
    pub input: String,
}

impl ByteOrder {
    /// Byte order of the machine running the codec.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::BigEndian
        } else {
            Self::LittleEndian
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "ABCD (Big-Endian)",
            Self::LittleEndian => "DCBA (Little-Endian)",
        }
    }
}

impl FromStr for ByteOrder {
    type Err = ParseByteOrderError;

    /// Accepts "ABCD", "BE", "BIG_ENDIAN", "big-endian", "network" for
    /// big-endian and "DCBA", "LE", "LITTLE_ENDIAN", "little-endian" for
    /// little-endian, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "ABCD" | "ABCDEFGH" | "BE" | "BIGENDIAN" | "BIG" | "NETWORK" => Ok(Self::BigEndian),
            "DCBA" | "HGFEDCBA" | "LE" | "LITTLEENDIAN" | "LITTLE" => Ok(Self::LittleEndian),
            _ => Err(ParseByteOrderError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
