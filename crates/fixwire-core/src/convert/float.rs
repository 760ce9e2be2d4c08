//! IEEE-754 converters.
//!
//! Values travel as their raw bit patterns, so a decode returns exactly the
//! float that was encoded. Infinities lie outside `[-MAX, MAX]` and are
//! rejected; NaN passes the range check.

use std::io::Read;

use super::integer::Packable;
use super::reader::read_width;
use crate::byte_order::ByteOrder;
use crate::error::{CodecError, Result};
use crate::wire::{ConversionResult, WireType, WireValue, layout};

fn widen(wire_type: WireType, value: WireValue) -> Result<f64> {
    match value {
        WireValue::F32(v) => Ok(v as f64),
        WireValue::F64(v) => Ok(v),
        WireValue::I64(v) => Ok(v as f64),
        WireValue::U64(v) => Ok(v as f64),
        WireValue::Bool(_) => Err(CodecError::TypeMismatch {
            wire_type,
            actual: value.kind(),
        }),
    }
}

fn check_range(wire_type: WireType, value: WireValue, wide: f64, min: f64, max: f64) -> Result<()> {
    if wide < min || wide > max {
        return Err(CodecError::OutOfRange {
            wire_type,
            value,
            min: WireValue::F64(min),
            max: WireValue::F64(max),
        });
    }
    Ok(())
}

pub(super) fn encode_float32(value: WireValue, order: ByteOrder) -> Result<Vec<u8>> {
    let wide = widen(WireType::Float32, value)?;
    check_range(
        WireType::Float32,
        value,
        wide,
        layout::MIN_FLOAT32,
        layout::MAX_FLOAT32,
    )?;
    // Each input rounds to f32 once. An f32 input keeps its exact bits,
    // NaN payload included.
    let single = match value {
        WireValue::F32(v) => v,
        WireValue::I64(v) => v as f32,
        WireValue::U64(v) => v as f32,
        _ => wide as f32,
    };
    Ok(single.to_bits().pack(order).to_vec())
}

pub(super) fn decode_float32(source: &mut dyn Read, order: ByteOrder) -> Result<ConversionResult> {
    let raw = read_width::<{ layout::FLOAT32_WIDTH }>(source, WireType::Float32)?;
    let v = f32::from_bits(u32::unpack(raw, order));
    Ok(ConversionResult::new(
        WireType::Float32,
        WireValue::F32(v),
        raw.to_vec(),
    ))
}

pub(super) fn encode_float64(value: WireValue, order: ByteOrder) -> Result<Vec<u8>> {
    let wide = widen(WireType::Float64, value)?;
    check_range(
        WireType::Float64,
        value,
        wide,
        layout::MIN_FLOAT64,
        layout::MAX_FLOAT64,
    )?;
    Ok(wide.to_bits().pack(order).to_vec())
}

pub(super) fn decode_float64(source: &mut dyn Read, order: ByteOrder) -> Result<ConversionResult> {
    let raw = read_width::<{ layout::FLOAT64_WIDTH }>(source, WireType::Float64)?;
    let v = f64::from_bits(u64::unpack(raw, order));
    Ok(ConversionResult::new(
        WireType::Float64,
        WireValue::F64(v),
        raw.to_vec(),
    ))
}
