//! Codec facade: owns the streams, the byte order and the converter table,
//! and turns `write_value`/`read_value` calls into converter dispatch.
//!
//! Writes are flushed after every value. Reads go through a
//! [`CapturingReader`], so the exact bytes consumed by a sequence of reads
//! can be inspected afterwards. Failures never change the registry or the
//! byte order, and the facade never closes a stream.

use std::io::{self, Read, Write};

use tracing::{debug, trace};

use crate::byte_order::ByteOrder;
use crate::capture::CapturingReader;
use crate::convert::Converter;
use crate::error::{CodecError, Direction, Result};
use crate::wire::{ConversionResult, WireType, WireValue};

mod builder;
mod registry;

pub use builder::CodecBuilder;
pub use registry::Registry;

/// Write side of a codec.
pub trait ValueWriter {
    fn byte_order(&self) -> ByteOrder;

    /// Encode `value` as `wire_type`, write and flush it. Returns the number
    /// of bytes written (always the type's width).
    fn write_value(&mut self, wire_type: WireType, value: WireValue) -> Result<usize>;
}

/// Read side of a codec.
pub trait ValueReader {
    fn byte_order(&self) -> ByteOrder;

    /// Read exactly one `wire_type` value.
    fn read_value(&mut self, wire_type: WireType) -> Result<WireValue>;

    /// Bytes consumed since construction or the last `clear_read_buffer`.
    fn read_bytes(&self) -> Vec<u8>;

    fn clear_read_buffer(&mut self);
}

/// Fixed-width value serializer/deserializer over a byte stream pair.
///
/// # Examples
/// ```
/// use fixwire_core::{BinaryCodec, ByteOrder, WireType, WireValue};
///
/// let mut writer = BinaryCodec::with_output(Vec::<u8>::new(), ByteOrder::BigEndian);
/// writer.write_value(WireType::Int32, -1)?;
/// writer.write_value(WireType::Float32, 1.5f32)?;
/// let bytes = writer.into_parts().1.unwrap();
/// assert_eq!(bytes, [0xFF, 0xFF, 0xFF, 0xFF, 0x3F, 0xC0, 0x00, 0x00]);
///
/// let mut reader = BinaryCodec::with_input(bytes.as_slice(), ByteOrder::BigEndian);
/// assert_eq!(reader.read_value(WireType::Int32)?, WireValue::I64(-1));
/// assert_eq!(reader.read_value(WireType::Float32)?, WireValue::F32(1.5));
/// assert_eq!(reader.read_bytes().len(), 8);
/// # Ok::<(), fixwire_core::CodecError>(())
/// ```
#[derive(Debug)]
pub struct BinaryCodec<R = io::Empty, W = io::Sink> {
    input: Option<CapturingReader<R>>,
    output: Option<W>,
    byte_order: ByteOrder,
    registry: Registry,
}

impl<R: Read, W: Write> BinaryCodec<R, W> {
    /// Codec owning both directions.
    pub fn new(input: R, output: W, byte_order: ByteOrder) -> Self {
        CodecBuilder::new(byte_order)
            .input(input)
            .output(output)
            .build()
    }
}

impl<R: Read> BinaryCodec<R, io::Sink> {
    /// Read-only codec.
    pub fn with_input(input: R, byte_order: ByteOrder) -> Self {
        CodecBuilder::new(byte_order).input(input).build()
    }
}

impl<W: Write> BinaryCodec<io::Empty, W> {
    /// Write-only codec.
    pub fn with_output(output: W, byte_order: ByteOrder) -> Self {
        CodecBuilder::new(byte_order).output(output).build()
    }
}

impl<R, W> BinaryCodec<R, W> {
    pub(crate) fn from_parts(
        input: Option<CapturingReader<R>>,
        output: Option<W>,
        byte_order: ByteOrder,
        registry: Registry,
    ) -> Self {
        debug!(
            byte_order = %byte_order,
            registered = registry.len(),
            readable = input.is_some(),
            writable = output.is_some(),
            "creating binary codec"
        );
        Self {
            input,
            output,
            byte_order,
            registry,
        }
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Input stream wrapped in its capture buffer, if this codec reads.
    pub fn input(&self) -> Option<&CapturingReader<R>> {
        self.input.as_ref()
    }

    pub fn output(&self) -> Option<&W> {
        self.output.as_ref()
    }

    /// Bytes consumed by reads since construction or the last
    /// `clear_read_buffer`. Empty for a write-only codec.
    pub fn read_bytes(&self) -> Vec<u8> {
        self.input
            .as_ref()
            .map(CapturingReader::read_bytes)
            .unwrap_or_default()
    }

    pub fn clear_read_buffer(&mut self) {
        if let Some(input) = self.input.as_mut() {
            input.clear();
        }
    }

    /// Hand the streams back to the caller.
    pub fn into_parts(self) -> (Option<R>, Option<W>) {
        (self.input.map(CapturingReader::into_inner), self.output)
    }

    fn converter(&self, wire_type: WireType) -> Result<Converter> {
        self.registry
            .get(wire_type)
            .copied()
            .ok_or(CodecError::UnsupportedType { wire_type })
    }
}

impl<R: Read, W> BinaryCodec<R, W> {
    /// Read one value of `wire_type` from the input stream.
    ///
    /// # Errors
    /// `UnsupportedType`, `StreamUnavailable`, `ShortRead` or `ReadFailure`.
    pub fn read_value(&mut self, wire_type: WireType) -> Result<WireValue> {
        self.read_result(wire_type).map(|result| result.value())
    }

    /// Like [`read_value`](Self::read_value), also returning the raw bytes.
    pub fn read_result(&mut self, wire_type: WireType) -> Result<ConversionResult> {
        trace!(%wire_type, "receiving value");
        let converter = self.converter(wire_type)?;
        let input = self.input.as_mut().ok_or(CodecError::StreamUnavailable {
            wire_type,
            direction: Direction::Input,
        })?;
        converter.decode(input, self.byte_order)
    }
}

impl<R, W: Write> BinaryCodec<R, W> {
    /// Encode `value` as `wire_type`, write it and flush the output stream.
    ///
    /// Nothing reaches the stream when validation fails.
    ///
    /// # Errors
    /// `UnsupportedType`, `StreamUnavailable`, `TypeMismatch`, `OutOfRange`
    /// or `WriteFailure`.
    pub fn write_value(
        &mut self,
        wire_type: WireType,
        value: impl Into<WireValue>,
    ) -> Result<usize> {
        let value = value.into();
        trace!(%wire_type, %value, "sending value");
        let converter = self.converter(wire_type)?;
        let output = self.output.as_mut().ok_or(CodecError::StreamUnavailable {
            wire_type,
            direction: Direction::Output,
        })?;
        let bytes = converter.encode(value, self.byte_order)?;
        output
            .write_all(&bytes)
            .and_then(|()| output.flush())
            .map_err(|source| CodecError::WriteFailure { wire_type, source })?;
        Ok(bytes.len())
    }
}

impl<R, W: Write> ValueWriter for BinaryCodec<R, W> {
    fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    fn write_value(&mut self, wire_type: WireType, value: WireValue) -> Result<usize> {
        BinaryCodec::write_value(self, wire_type, value)
    }
}

impl<R: Read, W> ValueReader for BinaryCodec<R, W> {
    fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    fn read_value(&mut self, wire_type: WireType) -> Result<WireValue> {
        BinaryCodec::read_value(self, wire_type)
    }

    fn read_bytes(&self) -> Vec<u8> {
        BinaryCodec::read_bytes(self)
    }

    fn clear_read_buffer(&mut self) {
        BinaryCodec::clear_read_buffer(self)
    }
}
