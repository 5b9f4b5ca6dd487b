/// A fixed-capacity output buffer for a single native call.
///
/// Owned exclusively by the call that allocated it and never reused. The
/// native convention leaves such buffers uninitialized until the call writes
/// into them; here the bytes are zero-filled so nothing uninitialized can
/// escape, but the contents are still meaningless until the call reports
/// success.
#[derive(Debug)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
}

/// Upper bound on a single output buffer.
///
/// Native string outputs are at most a few kilobytes; anything above this is
/// a corrupted config value, not a real request.
pub const MAX_CAPACITY: usize = 16 * 1024 * 1024;

impl OutputBuffer {
    /// Allocate a buffer of `requested` bytes, falling back to `fallback`.
    ///
    /// Requested sizes may originate from loosely typed launcher config, so
    /// they arrive as `f64`: a non-finite or non-positive request is replaced
    /// by the fallback, the result is truncated toward zero, and the final
    /// capacity is clamped to `1..=MAX_CAPACITY`. There is no error path.
    pub fn allocate(requested: f64, fallback: usize) -> Self {
        let capacity = if requested.is_finite() && requested > 0.0 {
            requested.trunc() as usize
        } else {
            fallback
        };
        Self {
            bytes: vec![0; capacity.clamp(1, MAX_CAPACITY)],
        }
    }

    /// The buffer's capacity in bytes. Always at least 1.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_request_is_floored() {
        assert_eq!(OutputBuffer::allocate(64.0, 256).capacity(), 64);
        assert_eq!(OutputBuffer::allocate(64.9, 256).capacity(), 64);
    }

    #[test]
    fn non_positive_request_uses_fallback() {
        assert_eq!(OutputBuffer::allocate(0.0, 256).capacity(), 256);
        assert_eq!(OutputBuffer::allocate(-8.0, 256).capacity(), 256);
    }

    #[test]
    fn non_finite_request_uses_fallback() {
        assert_eq!(OutputBuffer::allocate(f64::NAN, 128).capacity(), 128);
        assert_eq!(OutputBuffer::allocate(f64::INFINITY, 128).capacity(), 128);
        assert_eq!(OutputBuffer::allocate(f64::NEG_INFINITY, 128).capacity(), 128);
    }

    #[test]
    fn capacity_never_below_one() {
        assert_eq!(OutputBuffer::allocate(0.5, 0).capacity(), 1);
        assert_eq!(OutputBuffer::allocate(-1.0, 0).capacity(), 1);
    }

    #[test]
    fn absurd_request_clamps_to_max() {
        assert_eq!(OutputBuffer::allocate(1e300, 64).capacity(), MAX_CAPACITY);
        assert_eq!(
            OutputBuffer::allocate(64.0, usize::MAX).capacity(),
            64,
            "fallback only applies when the request is unusable"
        );
        assert_eq!(OutputBuffer::allocate(-1.0, usize::MAX).capacity(), MAX_CAPACITY);
    }

    #[test]
    fn fresh_buffer_is_zero_filled() {
        let buf = OutputBuffer::allocate(8.0, 256);
        assert!(buf.as_slice().iter().all(|b| *b == 0));
    }
}
