use std::io::Read;

use super::reader::read_width;
use crate::byte_order::ByteOrder;
use crate::error::{CodecError, Result};
use crate::wire::{ConversionResult, WireType, WireValue, layout};

const TRUE_BYTE: u8 = 0x01;
const FALSE_BYTE: u8 = 0x00;

pub(super) fn encode_bool(value: WireValue, _order: ByteOrder) -> Result<Vec<u8>> {
    match value {
        WireValue::Bool(true) => Ok(vec![TRUE_BYTE]),
        WireValue::Bool(false) => Ok(vec![FALSE_BYTE]),
        other => Err(CodecError::TypeMismatch {
            wire_type: WireType::Bool,
            actual: other.kind(),
        }),
    }
}

/// Any non-zero byte reads as `true`.
pub(super) fn decode_bool(source: &mut dyn Read, _order: ByteOrder) -> Result<ConversionResult> {
    let raw = read_width::<{ layout::BOOL_WIDTH }>(source, WireType::Bool)?;
    Ok(ConversionResult::new(
        WireType::Bool,
        WireValue::Bool(raw[0] != FALSE_BYTE),
        raw.to_vec(),
    ))
}
