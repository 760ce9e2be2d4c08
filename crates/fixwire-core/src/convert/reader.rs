use std::io::{ErrorKind, Read};

use crate::error::{CodecError, Result};
use crate::wire::WireType;

/// Pull exactly `N` bytes for `wire_type` out of `source`.
///
/// Unlike `Read::read_exact`, an early end of stream is reported with the
/// number of bytes that did arrive.
///
/// # Errors
/// `ShortRead` when the source ends before `N` bytes, `ReadFailure` for any
/// other I/O error (interrupted reads are retried).
pub(crate) fn read_width<const N: usize>(
    source: &mut dyn Read,
    wire_type: WireType,
) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    let mut filled = 0;
    while filled < N {
        match source.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(CodecError::ShortRead {
                    wire_type,
                    expected: N,
                    actual: filled,
                });
            }
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                return Err(CodecError::ReadFailure {
                    wire_type,
                    source: err,
                });
            }
        }
    }
    Ok(buf)
}
