use std::time::Duration;

/// Floor a loosely typed millisecond value to a non-negative integer.
///
/// NaN and negative values become 0, meaning no wait beyond the transport's
/// own minimum. Positive infinity saturates to `u64::MAX`: a caller asking
/// for an unbounded wait must not be turned into one that does not wait at
/// all.
pub fn floor_timeout_ms(timeout_ms: f64) -> u64 {
    if timeout_ms > 0.0 {
        // Saturating cast: +inf and out-of-range values become u64::MAX.
        timeout_ms.trunc() as u64
    } else {
        0
    }
}

/// Address and timeout for one pipe-proxied operation.
///
/// Ephemeral: resolved fresh per call from configuration, never cached or
/// shared between operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipeEndpoint {
    /// Opaque pipe address or path, passed through to the native connect.
    pub path: String,
    /// Connect/wait budget for the session.
    pub timeout: Duration,
}

impl PipeEndpoint {
    /// Build an endpoint from a path and a timeout in milliseconds.
    ///
    /// Timeouts may arrive from loosely typed launcher config; the value is
    /// sanitized by [`floor_timeout_ms`]: floored to whole milliseconds, NaN
    /// and negative values become 0, positive infinity saturates to the
    /// maximum wait.
    pub fn new(path: impl Into<String>, timeout_ms: f64) -> Self {
        Self {
            path: path.into(),
            timeout: Duration::from_millis(floor_timeout_ms(timeout_ms)),
        }
    }

    /// The timeout as whole milliseconds, the unit the native connect takes.
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_floored() {
        assert_eq!(PipeEndpoint::new("p", 1000.9).timeout_ms(), 1000);
    }

    #[test]
    fn negative_and_nan_timeouts_become_zero() {
        assert_eq!(PipeEndpoint::new("p", -5.0).timeout_ms(), 0);
        assert_eq!(PipeEndpoint::new("p", f64::NAN).timeout_ms(), 0);
        assert_eq!(PipeEndpoint::new("p", f64::NEG_INFINITY).timeout_ms(), 0);
    }

    #[test]
    fn positive_infinity_saturates_to_max_wait() {
        assert_eq!(floor_timeout_ms(f64::INFINITY), u64::MAX);
        assert_eq!(PipeEndpoint::new("p", f64::INFINITY).timeout_ms(), u64::MAX);
    }
}
