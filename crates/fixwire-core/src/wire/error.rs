use thiserror::Error;

/// Returned when a wire type name is not part of the catalog.
///
/// # Examples
/// ```
/// use fixwire_core::WireType;
///
/// let err = "u24".parse::<WireType>().unwrap_err();
/// assert!(err.to_string().contains("unknown wire type"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown wire type '{input}'")]
pub struct ParseWireTypeError {
    pub input: String,
}
