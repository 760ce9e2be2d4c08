//! Per-type converters.
//!
//! Each wire type maps to one `Converter`: a pair of plain functions that
//! pack a `WireValue` into exactly `width` bytes and unpack exactly `width`
//! bytes back into a `ConversionResult`. Converters hold no state and never
//! touch the output stream themselves; writing and flushing belong to the
//! codec facade.
//!
//! Layout:
//! - `reader`: exact-width reads with short read detection
//! - `integer`: two's-complement kinds (i8..i64, u8..u32)
//! - `float`: IEEE-754 single and double precision
//! - `boolean`: one byte, `0x00`/`0x01`
//!
//! Version française (résumé):
//! Chaque type binaire possède un convertisseur sans état (encodage et
//! décodage). Les bornes sont vérifiées avant l'encodage ; la lecture exige
//! exactement `width` octets, sinon une erreur `ShortRead` est levée.

use std::fmt;
use std::io::Read;

use crate::byte_order::ByteOrder;
use crate::error::Result;
use crate::wire::{ConversionResult, WireType, WireValue};

mod boolean;
mod float;
mod integer;
pub(crate) mod reader;

type EncodeFn = fn(WireValue, ByteOrder) -> Result<Vec<u8>>;
type DecodeFn = fn(&mut dyn Read, ByteOrder) -> Result<ConversionResult>;

/// Encode/decode pair bound to one wire type.
///
/// # Examples
/// ```
/// use fixwire_core::{ByteOrder, Converter, WireType, WireValue};
///
/// let converter = Converter::for_type(WireType::Float32);
/// let bytes = converter.encode(WireValue::F32(1.5), ByteOrder::BigEndian)?;
/// assert_eq!(bytes, [0x3F, 0xC0, 0x00, 0x00]);
///
/// let decoded = converter.decode(&mut bytes.as_slice(), ByteOrder::BigEndian)?;
/// assert_eq!(decoded.value(), WireValue::F32(1.5));
/// # Ok::<(), fixwire_core::CodecError>(())
/// ```
#[derive(Clone, Copy)]
pub struct Converter {
    wire_type: WireType,
    encode: EncodeFn,
    decode: DecodeFn,
}

impl Converter {
    /// Converter for `wire_type`. The match is exhaustive, so a new catalog
    /// entry cannot be added without its converter.
    pub fn for_type(wire_type: WireType) -> Self {
        match wire_type {
            WireType::Int8 => Self::bind(wire_type, integer::encode_int8, integer::decode_int8),
            WireType::UInt8 => Self::bind(wire_type, integer::encode_uint8, integer::decode_uint8),
            WireType::Int16 => Self::bind(wire_type, integer::encode_int16, integer::decode_int16),
            WireType::UInt16 => {
                Self::bind(wire_type, integer::encode_uint16, integer::decode_uint16)
            }
            WireType::Int32 => Self::bind(wire_type, integer::encode_int32, integer::decode_int32),
            WireType::UInt32 => {
                Self::bind(wire_type, integer::encode_uint32, integer::decode_uint32)
            }
            WireType::Int64 => Self::bind(wire_type, integer::encode_int64, integer::decode_int64),
            WireType::Float32 => Self::bind(wire_type, float::encode_float32, float::decode_float32),
            WireType::Float64 => Self::bind(wire_type, float::encode_float64, float::decode_float64),
            WireType::Bool => Self::bind(wire_type, boolean::encode_bool, boolean::decode_bool),
        }
    }

    fn bind(wire_type: WireType, encode: EncodeFn, decode: DecodeFn) -> Self {
        Self {
            wire_type,
            encode,
            decode,
        }
    }

    pub fn wire_type(&self) -> WireType {
        self.wire_type
    }

    /// Validate `value` and pack it into exactly `width` bytes.
    ///
    /// # Errors
    /// `TypeMismatch` for a value of the wrong kind, `OutOfRange` for a value
    /// outside the type's domain. Nothing is produced on failure.
    pub fn encode(&self, value: WireValue, order: ByteOrder) -> Result<Vec<u8>> {
        let bytes = (self.encode)(value, order)?;
        debug_assert_eq!(bytes.len(), self.wire_type.width());
        Ok(bytes)
    }

    /// Read exactly `width` bytes from `source` and unpack them.
    ///
    /// # Errors
    /// `ShortRead` when the source ends early, `ReadFailure` on I/O errors.
    pub fn decode(&self, source: &mut dyn Read, order: ByteOrder) -> Result<ConversionResult> {
        (self.decode)(source, order)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("wire_type", &self.wire_type)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::Converter;
    use crate::byte_order::ByteOrder;
    use crate::wire::{WireType, WireValue};

    fn sample(ty: WireType) -> WireValue {
        match ty {
            WireType::Int8 => WireValue::I64(-128),
            WireType::UInt8 => WireValue::U64(255),
            WireType::Int16 => WireValue::I64(-2),
            WireType::UInt16 => WireValue::U64(65_535),
            WireType::Int32 => WireValue::I64(i32::MIN as i64),
            WireType::UInt32 => WireValue::U64(u32::MAX as u64),
            WireType::Int64 => WireValue::I64(i64::MIN),
            WireType::Float32 => WireValue::F32(-3.25),
            WireType::Float64 => WireValue::F64(6.02214076e23),
            WireType::Bool => WireValue::Bool(true),
        }
    }

    #[test]
    fn every_type_roundtrips_in_both_orders() {
        for ty in WireType::ALL {
            let converter = Converter::for_type(ty);
            assert_eq!(converter.wire_type(), ty);
            for order in [ByteOrder::BigEndian, ByteOrder::LittleEndian] {
                let bytes = converter.encode(sample(ty), order).unwrap();
                assert_eq!(bytes.len(), ty.width(), "{ty} width");
                let decoded = converter.decode(&mut bytes.as_slice(), order).unwrap();
                assert_eq!(decoded.value(), sample(ty), "{ty} value");
                assert_eq!(decoded.raw(), bytes.as_slice());
            }
        }
    }

    #[test]
    fn multi_byte_orders_are_mirrors() {
        for ty in WireType::ALL.into_iter().filter(|ty| ty.width() > 1) {
            let converter = Converter::for_type(ty);
            let be = converter.encode(sample(ty), ByteOrder::BigEndian).unwrap();
            let mut le = converter
                .encode(sample(ty), ByteOrder::LittleEndian)
                .unwrap();
            le.reverse();
            assert_eq!(be, le, "{ty}");
        }
    }

    #[test]
    fn single_byte_types_ignore_order() {
        for ty in [WireType::Int8, WireType::UInt8, WireType::Bool] {
            let converter = Converter::for_type(ty);
            assert_eq!(
                converter.encode(sample(ty), ByteOrder::BigEndian).unwrap(),
                converter.encode(sample(ty), ByteOrder::LittleEndian).unwrap()
            );
        }
    }
}
