use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::WireType;

/// Host value handed to or produced by a converter.
///
/// Signed integer types decode to `I64`, unsigned ones to `U64`, so an
/// unsigned value never flips sign on the way back.
///
/// In JSON the value is a bare number or boolean. NaN and the infinities
/// have no JSON number form and travel as `"NaN"`, `"inf"` and `"-inf"`.
///
/// # Examples
/// ```
/// use fixwire_core::WireValue;
///
/// assert_eq!(WireValue::from(200u8), WireValue::U64(200));
/// assert_eq!(WireValue::from(-1i32).as_i64(), Some(-1));
/// assert_eq!(WireValue::F32(1.5).as_f64(), Some(1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(
        #[serde(
            serialize_with = "float_repr::serialize_f64",
            deserialize_with = "float_repr::deserialize_f64"
        )]
        f64,
    ),
    F32(#[serde(serialize_with = "float_repr::serialize_f32")] f32),
}

impl WireValue {
    /// Kind label used in type mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            WireValue::I64(_) => "signed integer",
            WireValue::U64(_) => "unsigned integer",
            WireValue::F32(_) => "float (4byte)",
            WireValue::F64(_) => "float (8byte)",
            WireValue::Bool(_) => "boolean",
        }
    }

    /// Integer view, `None` for floats, booleans and values above `i64::MAX`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            WireValue::I64(v) => Some(v),
            WireValue::U64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }

    /// Unsigned view, `None` for negative integers, floats and booleans.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            WireValue::I64(v) => u64::try_from(v).ok(),
            WireValue::U64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            WireValue::F32(v) => Some(v as f64),
            WireValue::F64(v) => Some(v),
            _ => None,
        }
    }

}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireValue::I64(v) => write!(f, "{v}"),
            WireValue::U64(v) => write!(f, "{v}"),
            WireValue::F32(v) => write!(f, "{v}"),
            WireValue::F64(v) => write!(f, "{v}"),
            WireValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for WireValue {
            fn from(value: $ty) -> Self {
                WireValue::I64(value as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for WireValue {
            fn from(value: $ty) -> Self {
                WireValue::U64(value as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<f32> for WireValue {
    fn from(value: f32) -> Self {
        WireValue::F32(value)
    }
}

impl From<f64> for WireValue {
    fn from(value: f64) -> Self {
        WireValue::F64(value)
    }
}

impl From<bool> for WireValue {
    fn from(value: bool) -> Self {
        WireValue::Bool(value)
    }
}

mod float_repr {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    const NAN: &str = "NaN";
    const INF: &str = "inf";
    const NEG_INF: &str = "-inf";

    fn label(v: f64) -> &'static str {
        if v.is_nan() {
            NAN
        } else if v > 0.0 {
            INF
        } else {
            NEG_INF
        }
    }

    pub(super) fn serialize_f64<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        if v.is_finite() {
            s.serialize_f64(*v)
        } else {
            s.serialize_str(label(*v))
        }
    }

    pub(super) fn serialize_f32<S: Serializer>(v: &f32, s: S) -> Result<S::Ok, S::Error> {
        if v.is_finite() {
            s.serialize_f32(*v)
        } else {
            s.serialize_str(label(*v as f64))
        }
    }

    pub(super) fn deserialize_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        d.deserialize_any(FloatVisitor)
    }

    struct FloatVisitor;

    impl<'de> Visitor<'de> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, \"NaN\", \"inf\" or \"-inf\"")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
            match v {
                NAN => Ok(f64::NAN),
                INF => Ok(f64::INFINITY),
                NEG_INF => Ok(f64::NEG_INFINITY),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }
    }
}

/// A decoded value together with the exact bytes it was read from.
///
/// `raw().len()` always equals `wire_type().width()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    wire_type: WireType,
    value: WireValue,
    raw: Vec<u8>,
}

impl ConversionResult {
    pub(crate) fn new(wire_type: WireType, value: WireValue, raw: Vec<u8>) -> Self {
        debug_assert_eq!(raw.len(), wire_type.width());
        Self {
            wire_type,
            value,
            raw,
        }
    }

    pub fn wire_type(&self) -> WireType {
        self.wire_type
    }

    pub fn value(&self) -> WireValue {
        self.value
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn into_parts(self) -> (WireValue, Vec<u8>) {
        (self.value, self.raw)
    }
}
