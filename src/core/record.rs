//! # Fixed-Layout Records
//!
//! Every game-state structure the client understands is a record with a
//! constant byte size and a fixed field order. Fields are little-endian;
//! text is stored as fixed arrays of UTF-16 code units or raw bytes.
//!
//! `write_to` and `read_from` are infallible and move exactly `SIZE` bytes.
//! The length check happens once, at the outermost `from_bytes` call, so
//! nested records never re-validate.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{ProtocolError, Result};

/// A fixed-size binary record.
pub trait Record: Sized {
    /// Name used in shape errors and logs
    const NAME: &'static str;

    /// Exact encoded size in bytes
    const SIZE: usize;

    /// Append exactly `SIZE` bytes to `buf`.
    fn write_to<B: BufMut>(&self, buf: &mut B);

    /// Consume exactly `SIZE` bytes from `buf`.
    ///
    /// Callers must ensure `buf.remaining() >= SIZE`.
    fn read_from<B: Buf>(buf: &mut B) -> Self;

    /// Encode into a freshly allocated buffer of `SIZE` bytes.
    fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(Self::SIZE);
        self.write_to(&mut buf);
        debug_assert_eq!(buf.len(), Self::SIZE, "{} wrote wrong size", Self::NAME);
        buf.freeze()
    }

    /// Decode from a buffer that must be exactly `SIZE` bytes long.
    fn from_bytes(data: &[u8]) -> Result<Self> {
        ensure_size::<Self>(data.len())?;
        let mut cursor = data;
        Ok(Self::read_from(&mut cursor))
    }
}

/// Shape check shared by every decode entry point.
pub fn ensure_size<R: Record>(actual: usize) -> Result<()> {
    if actual != R::SIZE {
        return Err(ProtocolError::Shape {
            record: R::NAME,
            expected: R::SIZE,
            actual,
        });
    }
    Ok(())
}

pub(crate) fn get_array<const N: usize, B: Buf>(buf: &mut B) -> [u8; N] {
    let mut out = [0u8; N];
    buf.copy_to_slice(&mut out);
    out
}

pub(crate) fn get_u16_array<const N: usize, B: Buf>(buf: &mut B) -> [u16; N] {
    let mut out = [0u16; N];
    for unit in out.iter_mut() {
        *unit = buf.get_u16_le();
    }
    out
}

pub(crate) fn put_u16_slice<B: BufMut>(buf: &mut B, units: &[u16]) {
    for unit in units {
        buf.put_u16_le(*unit);
    }
}

/// Encode `text` as UTF-16, truncated or zero-padded to `N` code units.
///
/// No terminator is reserved; a name that fills all `N` units is stored as-is.
pub fn utf16_fixed<const N: usize>(text: &str) -> [u16; N] {
    let mut out = [0u16; N];
    for (slot, unit) in out.iter_mut().zip(text.encode_utf16()) {
        *slot = unit;
    }
    out
}

/// Decode a fixed UTF-16 field up to the first NUL.
pub fn utf16_to_string(units: &[u16]) -> String {
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    String::from_utf16_lossy(&units[..end])
}

/// Copy `text` into a fixed byte field, truncated or zero-padded to `N`.
pub fn ascii_fixed<const N: usize>(text: &str) -> [u8; N] {
    let mut out = [0u8; N];
    let src = text.as_bytes();
    let len = src.len().min(N);
    out[..len].copy_from_slice(&src[..len]);
    out
}

/// Decode a fixed byte field up to the first NUL.
pub fn ascii_to_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
