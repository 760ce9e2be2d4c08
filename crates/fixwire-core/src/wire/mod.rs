//! Wire catalog: the fixed-width kinds, their domains and the value types
//! exchanged with converters.
//!
//! - `layout`: widths and bounds (source of truth)
//! - `types`: the closed `WireType` enumeration
//! - `value`: host values and decode results
//! - `error`: name parsing errors

pub mod error;
pub mod layout;
pub mod types;
pub mod value;

pub use error::ParseWireTypeError;
pub use types::{Domain, WireType};
pub use value::{ConversionResult, WireValue};
