use crate::buffer::OutputBuffer;
use crate::cstr::extract_cstring;

/// The sole success convention: status code `0`.
pub const STATUS_OK: i32 = 0;

/// Status-only call shape.
///
/// Returns `true` iff the native call reported status 0. A nonzero status and
/// a business-level "no" are indistinguishable here — the native convention
/// does not separate them, and this adapter does not invent a distinction.
pub fn status_call(f: impl FnOnce() -> i32) -> bool {
    f() == STATUS_OK
}

/// Numeric out-parameter call shape.
///
/// The native call fills a 4-byte slot; on success it is decoded as an
/// unsigned 32-bit little-endian integer. On failure the slot is discarded —
/// out-parameters from a failed call must not be trusted.
pub fn numeric_call(f: impl FnOnce(&mut [u8; 4]) -> i32) -> Option<u32> {
    let mut out = [0u8; 4];
    if f(&mut out) == STATUS_OK {
        Some(u32::from_le_bytes(out))
    } else {
        None
    }
}

/// String out-parameter call shape.
///
/// Allocates an [`OutputBuffer`] of the requested capacity (sanitized through
/// the allocator's fallback path), hands it to the native call, and extracts
/// the NUL-terminated string on success. Failure discards the buffer.
pub fn string_call(
    requested: f64,
    fallback: usize,
    f: impl FnOnce(&mut [u8]) -> i32,
) -> Option<String> {
    let mut buf = OutputBuffer::allocate(requested, fallback);
    if f(buf.as_mut_slice()) == STATUS_OK {
        Some(extract_cstring(buf.as_slice()))
    } else {
        None
    }
}
