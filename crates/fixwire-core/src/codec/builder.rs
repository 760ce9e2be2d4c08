use std::io;

use super::BinaryCodec;
use super::registry::Registry;
use crate::byte_order::ByteOrder;
use crate::capture::CapturingReader;

/// Step-by-step construction of a [`BinaryCodec`].
///
/// Streams are optional; a codec built without an input (or output) fails
/// reads (or writes) with `StreamUnavailable`.
///
/// # Examples
/// ```
/// use fixwire_core::{ByteOrder, CodecBuilder, WireType, WireValue};
///
/// let mut codec = CodecBuilder::new(ByteOrder::LittleEndian)
///     .output(Vec::<u8>::new())
///     .with_bool_support()
///     .build();
/// codec.write_value(WireType::Bool, true)?;
/// codec.write_value(WireType::UInt16, 0x1234u16)?;
/// assert_eq!(codec.output().unwrap(), &vec![0x01, 0x34, 0x12]);
/// # Ok::<(), fixwire_core::CodecError>(())
/// ```
#[derive(Debug)]
pub struct CodecBuilder<R = io::Empty, W = io::Sink> {
    byte_order: ByteOrder,
    input: Option<R>,
    output: Option<W>,
    bool_support: bool,
}

impl CodecBuilder {
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            input: None,
            output: None,
            bool_support: false,
        }
    }
}

impl<R, W> CodecBuilder<R, W> {
    pub fn input<R2>(self, input: R2) -> CodecBuilder<R2, W> {
        CodecBuilder {
            byte_order: self.byte_order,
            input: Some(input),
            output: self.output,
            bool_support: self.bool_support,
        }
    }

    pub fn output<W2>(self, output: W2) -> CodecBuilder<R, W2> {
        CodecBuilder {
            byte_order: self.byte_order,
            input: self.input,
            output: Some(output),
            bool_support: self.bool_support,
        }
    }

    pub fn byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Register the one-byte boolean converter next to the numeric ones.
    pub fn with_bool_support(mut self) -> Self {
        self.bool_support = true;
        self
    }

    pub fn build(self) -> BinaryCodec<R, W> {
        let registry = if self.bool_support {
            Registry::numeric_with_bool()
        } else {
            Registry::numeric()
        };
        BinaryCodec::from_parts(
            self.input.map(CapturingReader::new),
            self.output,
            self.byte_order,
            registry,
        )
    }
}
