//! fixwire core library: fixed-width binary value codec.
//!
//! Converts host numbers to and from exact-width binary representations in a
//! caller-chosen byte order, the way firmware on a microcontroller lays them
//! out in a raw byte stream. A codec owns an optional input stream (wrapped
//! in a capturing reader), an optional output stream, a byte order and an
//! immutable table of per-type converters.
//!
//! Invariants:
//! - Every encode produces exactly `width` bytes; every decode consumes
//!   exactly `width` bytes or fails with `ShortRead`.
//! - Values outside a type's domain are rejected before any byte is written.
//! - Unsigned values decode as non-negative (`FF FF FF FF` as `u32` is
//!   4294967295, never -1).
//! - The capture buffer holds precisely the bytes pulled from the source.
//!
//! Version française (résumé):
//! Cette crate convertit des nombres vers et depuis une représentation
//! binaire à largeur fixe, avec un ordre d'octets choisi par l'appelant.
//! Les valeurs hors domaine sont refusées, les lectures incomplètes échouent
//! avec `ShortRead`, et le lecteur de capture conserve les octets lus.
//!
//! # Examples
//! ```
//! use fixwire_core::{BinaryCodec, ByteOrder, WireType, WireValue};
//!
//! let mut writer = BinaryCodec::with_output(Vec::<u8>::new(), ByteOrder::BigEndian);
//! writer.write_value(WireType::UInt32, 4_294_967_295u32)?;
//! let bytes = writer.into_parts().1.unwrap_or_default();
//! assert_eq!(bytes, [0xFF, 0xFF, 0xFF, 0xFF]);
//!
//! let mut reader = BinaryCodec::with_input(bytes.as_slice(), ByteOrder::BigEndian);
//! assert_eq!(reader.read_value(WireType::UInt32)?, WireValue::U64(4_294_967_295));
//! # Ok::<(), fixwire_core::CodecError>(())
//! ```

mod byte_order;
mod capture;
mod codec;
mod convert;
mod error;
mod inspect;
pub mod wire;

pub use byte_order::{ByteOrder, ParseByteOrderError};
pub use capture::CapturingReader;
pub use codec::{BinaryCodec, CodecBuilder, Registry, ValueReader, ValueWriter};
pub use convert::Converter;
pub use error::{CodecError, Direction, Result};
pub use inspect::{
    DecodeFailure, DecodedValue, InspectionReport, REPORT_VERSION, encode_values, inspect, to_hex,
};
pub use wire::{ConversionResult, Domain, ParseWireTypeError, WireType, WireValue};
