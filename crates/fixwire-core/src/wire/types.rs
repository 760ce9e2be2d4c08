use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseWireTypeError;
use super::layout;

/// Fixed-width kinds understood by the codec.
///
/// Serialized as the short name; deserialization accepts every spelling
/// `FromStr` does.
///
/// # Examples
/// ```
/// use fixwire_core::WireType;
///
/// let ty: WireType = "uint32".parse()?;
/// assert_eq!(ty, WireType::UInt32);
/// assert_eq!(ty.width(), 4);
/// assert!(!ty.is_signed());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum WireType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    Float32,
    Float64,
    Bool,
}

/// Representable range of a wire type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    Integer { min: i64, max: i64 },
    Float { min: f64, max: f64 },
    Bool,
}

impl WireType {
    pub const COUNT: usize = 10;

    /// Every wire type, in table order.
    pub const ALL: [WireType; Self::COUNT] = [
        WireType::Int8,
        WireType::UInt8,
        WireType::Int16,
        WireType::UInt16,
        WireType::Int32,
        WireType::UInt32,
        WireType::Int64,
        WireType::Float32,
        WireType::Float64,
        WireType::Bool,
    ];

    /// Dense slot used by the converter table.
    pub const fn index(self) -> usize {
        match self {
            WireType::Int8 => 0,
            WireType::UInt8 => 1,
            WireType::Int16 => 2,
            WireType::UInt16 => 3,
            WireType::Int32 => 4,
            WireType::UInt32 => 5,
            WireType::Int64 => 6,
            WireType::Float32 => 7,
            WireType::Float64 => 8,
            WireType::Bool => 9,
        }
    }

    /// Number of bytes on the wire.
    pub const fn width(self) -> usize {
        match self {
            WireType::Int8 | WireType::UInt8 => layout::INT8_WIDTH,
            WireType::Int16 | WireType::UInt16 => layout::INT16_WIDTH,
            WireType::Int32 | WireType::UInt32 => layout::INT32_WIDTH,
            WireType::Int64 => layout::INT64_WIDTH,
            WireType::Float32 => layout::FLOAT32_WIDTH,
            WireType::Float64 => layout::FLOAT64_WIDTH,
            WireType::Bool => layout::BOOL_WIDTH,
        }
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            WireType::Int8
                | WireType::Int16
                | WireType::Int32
                | WireType::Int64
                | WireType::Float32
                | WireType::Float64
        )
    }

    pub const fn domain(self) -> Domain {
        match self {
            WireType::Int8 => Domain::Integer {
                min: layout::MIN_INT8,
                max: layout::MAX_INT8,
            },
            WireType::UInt8 => Domain::Integer {
                min: layout::MIN_UINT8,
                max: layout::MAX_UINT8,
            },
            WireType::Int16 => Domain::Integer {
                min: layout::MIN_INT16,
                max: layout::MAX_INT16,
            },
            WireType::UInt16 => Domain::Integer {
                min: layout::MIN_UINT16,
                max: layout::MAX_UINT16,
            },
            WireType::Int32 => Domain::Integer {
                min: layout::MIN_INT32,
                max: layout::MAX_INT32,
            },
            WireType::UInt32 => Domain::Integer {
                min: layout::MIN_UINT32,
                max: layout::MAX_UINT32,
            },
            WireType::Int64 => Domain::Integer {
                min: layout::MIN_INT64,
                max: layout::MAX_INT64,
            },
            WireType::Float32 => Domain::Float {
                min: layout::MIN_FLOAT32,
                max: layout::MAX_FLOAT32,
            },
            WireType::Float64 => Domain::Float {
                min: layout::MIN_FLOAT64,
                max: layout::MAX_FLOAT64,
            },
            WireType::Bool => Domain::Bool,
        }
    }

    /// Canonical short name (`i8`, `u32`, `f64`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            WireType::Int8 => "i8",
            WireType::UInt8 => "u8",
            WireType::Int16 => "i16",
            WireType::UInt16 => "u16",
            WireType::Int32 => "i32",
            WireType::UInt32 => "u32",
            WireType::Int64 => "i64",
            WireType::Float32 => "f32",
            WireType::Float64 => "f64",
            WireType::Bool => "bool",
        }
    }

    /// Human description used in diagnostics.
    pub const fn description(self) -> &'static str {
        match self {
            WireType::Int8 => "signed byte (1byte)",
            WireType::UInt8 => "unsigned byte (1byte)",
            WireType::Int16 => "signed int (2byte)",
            WireType::UInt16 => "unsigned int (2byte)",
            WireType::Int32 => "signed int (4byte)",
            WireType::UInt32 => "unsigned int (4byte)",
            WireType::Int64 => "signed int (8byte)",
            WireType::Float32 => "signed float (4byte)",
            WireType::Float64 => "signed float (8byte)",
            WireType::Bool => "boolean (1byte)",
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WireType {
    type Err = ParseWireTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let ty = match normalized.as_str() {
            "i8" | "int8" | "byte" | "sbyte" => WireType::Int8,
            "u8" | "uint8" | "ubyte" => WireType::UInt8,
            "i16" | "int16" | "short" => WireType::Int16,
            "u16" | "uint16" | "ushort" => WireType::UInt16,
            "i32" | "int32" | "int" => WireType::Int32,
            "u32" | "uint32" | "uint" => WireType::UInt32,
            "i64" | "int64" | "long" => WireType::Int64,
            "f32" | "float32" | "float" => WireType::Float32,
            "f64" | "float64" | "double" => WireType::Float64,
            "bool" | "boolean" => WireType::Bool,
            _ => {
                return Err(ParseWireTypeError {
                    input: s.to_string(),
                });
            }
        };
        Ok(ty)
    }
}

impl TryFrom<String> for WireType {
    type Error = ParseWireTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WireType> for &'static str {
    fn from(wire_type: WireType) -> Self {
        wire_type.name()
    }
}
