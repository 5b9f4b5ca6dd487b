//! The out-of-process update pipe: endpoint resolution, JSON envelopes, and a
//! scoped session that guarantees acquire-use-release semantics.
//!
//! Long-running operations are proxied over a named pipe with a caller-supplied
//! timeout. A session is opened for exactly one unit of work and closed on
//! every exit path; protocol hiccups (no endpoint, failed connect, malformed
//! response) degrade to "no result" rather than surfacing errors.

pub mod endpoint;
pub mod envelope;
pub mod session;

pub use endpoint::{floor_timeout_ms, PipeEndpoint};
pub use envelope::{decode_envelope, decode_value, encode_request};
pub use session::with_connection;
