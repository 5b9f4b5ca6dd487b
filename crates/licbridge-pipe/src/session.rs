use licbridge_marshal::STATUS_OK;
use tracing::debug;

use crate::endpoint::PipeEndpoint;

/// Runs `close` when dropped, including during unwind.
struct CloseGuard<F: FnOnce()> {
    close: Option<F>,
}

impl<F: FnOnce()> Drop for CloseGuard<F> {
    fn drop(&mut self) {
        if let Some(close) = self.close.take() {
            close();
        }
    }
}

/// Scoped pipe session: connect, run one unit of work, close.
///
/// Session lifecycle per call:
/// - no endpoint configured: unavailable — return `None`, no connect attempted;
/// - `connect` returns nonzero: return `None`; close is not invoked because no
///   connection was established;
/// - connected: `work` runs exactly once, then the connection is closed. Close
///   runs on every exit path, including a panicking unit of work, exactly once.
///
/// Sessions are never reused; each pipe-proxied operation gets a fresh one.
pub fn with_connection<T>(
    endpoint: Option<&PipeEndpoint>,
    connect: impl FnOnce(&PipeEndpoint) -> i32,
    close: impl FnOnce(),
    work: impl FnOnce() -> T,
) -> Option<T> {
    let Some(endpoint) = endpoint else {
        debug!("no update pipe endpoint configured; operation unavailable");
        return None;
    };

    debug!(
        path = %endpoint.path,
        timeout_ms = endpoint.timeout_ms(),
        "connecting to update pipe"
    );
    let status = connect(endpoint);
    if status != STATUS_OK {
        debug!(status, "update pipe connect failed");
        return None;
    }

    let _guard = CloseGuard { close: Some(close) };
    let result = work();
    debug!(path = %endpoint.path, "update pipe session complete");
    Some(result)
}
