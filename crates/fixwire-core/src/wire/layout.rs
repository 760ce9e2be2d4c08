//! Widths and numeric domains of the wire catalog.
//!
//! Integer domains are held in `i64`, which is at least one bit wider than
//! every unsigned width in the catalog, so the top unsigned value of a width
//! never reads as negative.

pub const INT8_WIDTH: usize = 1;
pub const INT16_WIDTH: usize = 2;
pub const INT32_WIDTH: usize = 4;
pub const INT64_WIDTH: usize = 8;
pub const FLOAT32_WIDTH: usize = 4;
pub const FLOAT64_WIDTH: usize = 8;
pub const BOOL_WIDTH: usize = 1;

pub const MIN_INT8: i64 = i8::MIN as i64;
pub const MAX_INT8: i64 = i8::MAX as i64;
pub const MIN_UINT8: i64 = 0;
pub const MAX_UINT8: i64 = u8::MAX as i64;

pub const MIN_INT16: i64 = i16::MIN as i64;
pub const MAX_INT16: i64 = i16::MAX as i64;
pub const MIN_UINT16: i64 = 0;
pub const MAX_UINT16: i64 = u16::MAX as i64;

pub const MIN_INT32: i64 = i32::MIN as i64;
pub const MAX_INT32: i64 = i32::MAX as i64;
pub const MIN_UINT32: i64 = 0;
pub const MAX_UINT32: i64 = u32::MAX as i64;

pub const MIN_INT64: i64 = i64::MIN;
pub const MAX_INT64: i64 = i64::MAX;

pub const MIN_FLOAT32: f64 = -(f32::MAX as f64);
pub const MAX_FLOAT32: f64 = f32::MAX as f64;
pub const MIN_FLOAT64: f64 = -f64::MAX;
pub const MAX_FLOAT64: f64 = f64::MAX;
