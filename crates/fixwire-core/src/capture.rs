//! Read-through byte capture.
//!
//! `CapturingReader` owns a byte source and records every byte the source
//! hands out, in order. It forwards reads unchanged: same counts, same EOF,
//! same errors. Bytes delivered by a read that later turns out to be short
//! are still recorded.

use std::io::{self, Read};

/// Transparent `Read` wrapper that keeps a copy of everything read.
///
/// # Examples
/// ```
/// use std::io::Read;
///
/// use fixwire_core::CapturingReader;
///
/// let mut reader = CapturingReader::new(&[1u8, 2, 3][..]);
/// let mut buf = [0u8; 2];
/// reader.read_exact(&mut buf)?;
/// assert_eq!(reader.read_bytes(), vec![1, 2]);
///
/// reader.clear();
/// reader.read_exact(&mut buf[..1])?;
/// assert_eq!(reader.read_bytes(), vec![3]);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct CapturingReader<R> {
    inner: R,
    captured: Vec<u8>,
}

impl<R> CapturingReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            captured: Vec::new(),
        }
    }

    /// Snapshot of the bytes read since construction or the last `clear`.
    pub fn read_bytes(&self) -> Vec<u8> {
        self.captured.clone()
    }

    /// Borrowed view of the capture buffer.
    pub fn captured(&self) -> &[u8] {
        &self.captured
    }

    pub fn captured_len(&self) -> usize {
        self.captured.len()
    }

    /// Empty the capture buffer. The source position is unaffected.
    pub fn clear(&mut self) {
        self.captured.clear();
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for CapturingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.captured.extend_from_slice(&buf[..n]);
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::CapturingReader;
    use std::io::{self, Cursor, Read};

    /// Returns two bytes, then fails.
    struct FailsAfterTwo {
        calls: usize,
    }

    impl Read for FailsAfterTwo {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.calls += 1;
            if self.calls > 1 {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            let n = buf.len().min(2);
            buf[..n].fill(0xEE);
            Ok(n)
        }
    }

    #[test]
    fn records_in_read_order() {
        let mut reader = CapturingReader::new(Cursor::new(vec![10u8, 20, 30, 40]));
        let mut one = [0u8; 1];
        let mut three = [0u8; 3];
        reader.read_exact(&mut one).unwrap();
        reader.read_exact(&mut three).unwrap();
        assert_eq!(reader.read_bytes(), vec![10, 20, 30, 40]);
        assert_eq!(reader.captured_len(), 4);
    }

    #[test]
    fn eof_is_forwarded_without_capture() {
        let mut reader = CapturingReader::new(Cursor::new(Vec::<u8>::new()));
        let mut buf = [0u8; 4];
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
        assert!(reader.read_bytes().is_empty());
    }

    #[test]
    fn clear_keeps_source_position() {
        let mut reader = CapturingReader::new(Cursor::new(vec![1u8, 2, 3]));
        let mut buf = [0u8; 2];
        reader.read_exact(&mut buf).unwrap();
        reader.clear();
        assert!(reader.read_bytes().is_empty());
        assert_eq!(reader.get_ref().position(), 2);

        reader.read_exact(&mut buf[..1]).unwrap();
        assert_eq!(reader.read_bytes(), vec![3]);
    }

    #[test]
    fn errors_pass_through_and_keep_delivered_bytes() {
        let mut reader = CapturingReader::new(FailsAfterTwo { calls: 0 });
        let mut buf = [0u8; 4];
        let err = reader.read_exact(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
        assert_eq!(reader.read_bytes(), vec![0xEE, 0xEE]);
    }

    #[test]
    fn snapshot_is_independent() {
        let mut reader = CapturingReader::new(Cursor::new(vec![7u8, 8]));
        let mut buf = [0u8; 1];
        reader.read_exact(&mut buf).unwrap();
        let snapshot = reader.read_bytes();
        reader.read_exact(&mut buf).unwrap();
        assert_eq!(snapshot, vec![7]);
        assert_eq!(reader.captured(), &[7, 8]);
    }
}
