//! Two's-complement integer converters.
//!
//! Inputs are range-checked in `i128` so neither an `I64` nor a `U64` value
//! can wrap before the comparison. Unsigned decodes produce `U64`.

use std::io::Read;

use super::reader::read_width;
use crate::byte_order::ByteOrder;
use crate::error::{CodecError, Result};
use crate::wire::{ConversionResult, WireType, WireValue, layout};

/// Fixed-size host integer that can be packed in either byte order.
pub(crate) trait Packable<const N: usize>: Sized {
    fn pack(self, order: ByteOrder) -> [u8; N];
    fn unpack(bytes: [u8; N], order: ByteOrder) -> Self;
}

macro_rules! impl_packable {
    ($($ty:ty => $n:expr),* $(,)?) => {
        $(impl Packable<$n> for $ty {
            fn pack(self, order: ByteOrder) -> [u8; $n] {
                match order {
                    ByteOrder::BigEndian => self.to_be_bytes(),
                    ByteOrder::LittleEndian => self.to_le_bytes(),
                }
            }

            fn unpack(bytes: [u8; $n], order: ByteOrder) -> Self {
                match order {
                    ByteOrder::BigEndian => <$ty>::from_be_bytes(bytes),
                    ByteOrder::LittleEndian => <$ty>::from_le_bytes(bytes),
                }
            }
        })*
    };
}

impl_packable!(
    i8 => 1,
    u8 => 1,
    i16 => 2,
    u16 => 2,
    i32 => 4,
    u32 => 4,
    i64 => 8,
    u64 => 8,
);

/// Validate an integer input against `[min, max]`.
fn checked_integer(wire_type: WireType, value: WireValue, min: i64, max: i64) -> Result<i64> {
    let wide = match value {
        WireValue::I64(v) => v as i128,
        WireValue::U64(v) => v as i128,
        other => {
            return Err(CodecError::TypeMismatch {
                wire_type,
                actual: other.kind(),
            });
        }
    };
    if wide < min as i128 || wide > max as i128 {
        return Err(CodecError::OutOfRange {
            wire_type,
            value,
            min: WireValue::I64(min),
            max: WireValue::I64(max),
        });
    }
    Ok(wide as i64)
}

pub(super) fn encode_int8(value: WireValue, order: ByteOrder) -> Result<Vec<u8>> {
    let v = checked_integer(WireType::Int8, value, layout::MIN_INT8, layout::MAX_INT8)?;
    Ok((v as i8).pack(order).to_vec())
}

pub(super) fn decode_int8(source: &mut dyn Read, order: ByteOrder) -> Result<ConversionResult> {
    let raw = read_width::<{ layout::INT8_WIDTH }>(source, WireType::Int8)?;
    let v = i8::unpack(raw, order);
    Ok(ConversionResult::new(
        WireType::Int8,
        WireValue::I64(v as i64),
        raw.to_vec(),
    ))
}

pub(super) fn encode_uint8(value: WireValue, order: ByteOrder) -> Result<Vec<u8>> {
    let v = checked_integer(WireType::UInt8, value, layout::MIN_UINT8, layout::MAX_UINT8)?;
    Ok((v as u8).pack(order).to_vec())
}

pub(super) fn decode_uint8(source: &mut dyn Read, order: ByteOrder) -> Result<ConversionResult> {
    let raw = read_width::<{ layout::INT8_WIDTH }>(source, WireType::UInt8)?;
    let v = u8::unpack(raw, order);
    Ok(ConversionResult::new(
        WireType::UInt8,
        WireValue::U64(v as u64),
        raw.to_vec(),
    ))
}

pub(super) fn encode_int16(value: WireValue, order: ByteOrder) -> Result<Vec<u8>> {
    let v = checked_integer(WireType::Int16, value, layout::MIN_INT16, layout::MAX_INT16)?;
    Ok((v as i16).pack(order).to_vec())
}

pub(super) fn decode_int16(source: &mut dyn Read, order: ByteOrder) -> Result<ConversionResult> {
    let raw = read_width::<{ layout::INT16_WIDTH }>(source, WireType::Int16)?;
    let v = i16::unpack(raw, order);
    Ok(ConversionResult::new(
        WireType::Int16,
        WireValue::I64(v as i64),
        raw.to_vec(),
    ))
}

pub(super) fn encode_uint16(value: WireValue, order: ByteOrder) -> Result<Vec<u8>> {
    let v = checked_integer(
        WireType::UInt16,
        value,
        layout::MIN_UINT16,
        layout::MAX_UINT16,
    )?;
    Ok((v as u16).pack(order).to_vec())
}

pub(super) fn decode_uint16(source: &mut dyn Read, order: ByteOrder) -> Result<ConversionResult> {
    let raw = read_width::<{ layout::INT16_WIDTH }>(source, WireType::UInt16)?;
    let v = u16::unpack(raw, order);
    Ok(ConversionResult::new(
        WireType::UInt16,
        WireValue::U64(v as u64),
        raw.to_vec(),
    ))
}

pub(super) fn encode_int32(value: WireValue, order: ByteOrder) -> Result<Vec<u8>> {
    let v = checked_integer(WireType::Int32, value, layout::MIN_INT32, layout::MAX_INT32)?;
    Ok((v as i32).pack(order).to_vec())
}

pub(super) fn decode_int32(source: &mut dyn Read, order: ByteOrder) -> Result<ConversionResult> {
    let raw = read_width::<{ layout::INT32_WIDTH }>(source, WireType::Int32)?;
    let v = i32::unpack(raw, order);
    Ok(ConversionResult::new(
        WireType::Int32,
        WireValue::I64(v as i64),
        raw.to_vec(),
    ))
}

pub(super) fn encode_uint32(value: WireValue, order: ByteOrder) -> Result<Vec<u8>> {
    let v = checked_integer(
        WireType::UInt32,
        value,
        layout::MIN_UINT32,
        layout::MAX_UINT32,
    )?;
    Ok((v as u32).pack(order).to_vec())
}

pub(super) fn decode_uint32(source: &mut dyn Read, order: ByteOrder) -> Result<ConversionResult> {
    let raw = read_width::<{ layout::INT32_WIDTH }>(source, WireType::UInt32)?;
    let v = u32::unpack(raw, order);
    Ok(ConversionResult::new(
        WireType::UInt32,
        WireValue::U64(v as u64),
        raw.to_vec(),
    ))
}

pub(super) fn encode_int64(value: WireValue, order: ByteOrder) -> Result<Vec<u8>> {
    let v = checked_integer(WireType::Int64, value, layout::MIN_INT64, layout::MAX_INT64)?;
    Ok(v.pack(order).to_vec())
}

pub(super) fn decode_int64(source: &mut dyn Read, order: ByteOrder) -> Result<ConversionResult> {
    let raw = read_width::<{ layout::INT64_WIDTH }>(source, WireType::Int64)?;
    let v = i64::unpack(raw, order);
    Ok(ConversionResult::new(
        WireType::Int64,
        WireValue::I64(v),
        raw.to_vec(),
    ))
}
