//! Errors raised by converters and the codec facade.

use std::fmt;

use thiserror::Error;

use crate::wire::{WireType, WireValue};

/// Stream direction of a codec instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => f.write_str("input"),
            Direction::Output => f.write_str("output"),
        }
    }
}

/// Failure of a single `write_value`/`read_value` call.
///
/// Every variant names the wire type involved.
///
/// # Examples
/// ```
/// use fixwire_core::{BinaryCodec, ByteOrder, CodecError, WireType, WireValue};
///
/// let mut codec = BinaryCodec::with_output(Vec::<u8>::new(), ByteOrder::BigEndian);
/// let err = codec.write_value(WireType::Int8, WireValue::I64(200)).unwrap_err();
/// assert!(matches!(err, CodecError::OutOfRange { .. }));
/// assert!(err.to_string().contains("v >= -128 && v <= 127"));
/// ```
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("no converter found for binary type: {wire_type}")]
    UnsupportedType { wire_type: WireType },

    #[error("invalid value specified: got '{actual}', expected '{}'", .wire_type.description())]
    TypeMismatch {
        wire_type: WireType,
        actual: &'static str,
    },

    #[error(
        "value out of range for {wire_type}: got 'v = {value}', expected 'v >= {min} && v <= {max}'"
    )]
    OutOfRange {
        wire_type: WireType,
        value: WireValue,
        min: WireValue,
        max: WireValue,
    },

    #[error(
        "reading {wire_type} incomplete: expected {expected} number of bytes, got {actual}"
    )]
    ShortRead {
        wire_type: WireType,
        expected: usize,
        actual: usize,
    },

    #[error("cannot write value of type {wire_type}: {source}")]
    WriteFailure {
        wire_type: WireType,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot receive value of type {wire_type}: {source}")]
    ReadFailure {
        wire_type: WireType,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot transfer value of type {wire_type}: codec has no {direction} stream")]
    StreamUnavailable {
        wire_type: WireType,
        direction: Direction,
    },
}

impl CodecError {
    /// Wire type the failed call was made with.
    pub fn wire_type(&self) -> WireType {
        match self {
            CodecError::UnsupportedType { wire_type }
            | CodecError::TypeMismatch { wire_type, .. }
            | CodecError::OutOfRange { wire_type, .. }
            | CodecError::ShortRead { wire_type, .. }
            | CodecError::WriteFailure { wire_type, .. }
            | CodecError::ReadFailure { wire_type, .. }
            | CodecError::StreamUnavailable { wire_type, .. } => *wire_type,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
