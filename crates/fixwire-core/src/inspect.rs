//! Decode sessions for protocol debugging.
//!
//! `inspect` walks a list of wire types over a reader and records, for each
//! value, the bytes the capture buffer saw. Decoding stops at the first
//! failure; the failure and the bytes it consumed end up in the report.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::byte_order::ByteOrder;
use crate::codec::{BinaryCodec, CodecBuilder, ValueReader};
use crate::error::Result;
use crate::wire::{WireType, WireValue};

/// Current inspection report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Outcome of decoding a layout of wire types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionReport {
    /// Report schema version.
    pub report_version: u32,
    /// Byte order the values were decoded with.
    pub byte_order: ByteOrder,
    /// Decoded values in read order.
    pub values: Vec<DecodedValue>,
    /// Total bytes pulled from the source, including a failed read's bytes.
    pub bytes_consumed: usize,
    /// Every consumed byte, hex encoded.
    pub captured: String,
    /// First failure, when decoding stopped early.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<DecodeFailure>,
}

/// One decoded value and where it sat in the stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedValue {
    pub offset: usize,
    pub wire_type: WireType,
    pub value: WireValue,
    /// Raw bytes, hex encoded.
    pub raw: String,
}

/// Failure that ended an inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeFailure {
    pub offset: usize,
    pub wire_type: WireType,
    pub message: String,
    /// Bytes the failed read consumed, hex encoded.
    pub raw: String,
}

impl InspectionReport {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Lowercase, space separated hex (`"3f c0 00 00"`).
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode `layout` from `reader`, one value per entry.
///
/// The reader's capture buffer is cleared before each value so every entry
/// carries exactly the bytes it consumed.
///
/// # Examples
/// ```
/// use fixwire_core::{BinaryCodec, ByteOrder, WireType, WireValue, inspect};
///
/// let bytes = [0x7Fu8, 0x12, 0x34];
/// let mut codec = BinaryCodec::with_input(&bytes[..], ByteOrder::BigEndian);
/// let report = inspect(&mut codec, &[WireType::Int8, WireType::UInt16]);
///
/// assert!(report.is_complete());
/// assert_eq!(report.values[1].value, WireValue::U64(0x1234));
/// assert_eq!(report.values[1].raw, "12 34");
/// assert_eq!(report.bytes_consumed, 3);
/// ```
pub fn inspect(reader: &mut dyn ValueReader, layout: &[WireType]) -> InspectionReport {
    let mut values = Vec::with_capacity(layout.len());
    let mut consumed = Vec::new();
    let mut failure = None;

    for &wire_type in layout {
        reader.clear_read_buffer();
        let offset = consumed.len();
        let result = reader.read_value(wire_type);
        let raw = reader.read_bytes();
        consumed.extend_from_slice(&raw);
        match result {
            Ok(value) => values.push(DecodedValue {
                offset,
                wire_type,
                value,
                raw: to_hex(&raw),
            }),
            Err(err) => {
                debug!(%wire_type, offset, error = %err, "inspection stopped");
                failure = Some(DecodeFailure {
                    offset,
                    wire_type,
                    message: err.to_string(),
                    raw: to_hex(&raw),
                });
                break;
            }
        }
    }

    InspectionReport {
        report_version: REPORT_VERSION,
        byte_order: reader.byte_order(),
        values,
        bytes_consumed: consumed.len(),
        captured: to_hex(&consumed),
        failure,
    }
}

/// Encode `values` back to back into a fresh buffer.
///
/// # Errors
/// The first converter failure; no partial buffer is returned.
///
/// # Examples
/// ```
/// use fixwire_core::{ByteOrder, WireType, WireValue, encode_values};
///
/// let bytes = encode_values(
///     ByteOrder::LittleEndian,
///     &[(WireType::UInt16, WireValue::U64(1)), (WireType::Int8, WireValue::I64(-1))],
///     false,
/// )?;
/// assert_eq!(bytes, [0x01, 0x00, 0xFF]);
/// # Ok::<(), fixwire_core::CodecError>(())
/// ```
pub fn encode_values(
    byte_order: ByteOrder,
    values: &[(WireType, WireValue)],
    bool_support: bool,
) -> Result<Vec<u8>> {
    let mut builder = CodecBuilder::new(byte_order).output(Vec::<u8>::new());
    if bool_support {
        builder = builder.with_bool_support();
    }
    let mut codec: BinaryCodec<_, Vec<u8>> = builder.build();
    for &(wire_type, value) in values {
        codec.write_value(wire_type, value)?;
    }
    Ok(codec.into_parts().1.unwrap_or_default())
}
