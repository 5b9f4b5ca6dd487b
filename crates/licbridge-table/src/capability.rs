//! Call shapes the native function table exposes.
//!
//! Every entry point falls into one of a handful of shapes. The shapes are the
//! contract: a status code where `0` means success, out-parameters that are
//! only trustworthy on success, and pipe-proxied entries that speak JSON text.

/// Argument to a status-shape native call.
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    /// A borrowed UTF-8 string argument.
    Str(&'a str),
    /// An unsigned 32-bit flag or mode argument.
    U32(u32),
}

/// Status-only call: arguments in, status code out.
pub type StatusFn = Box<dyn Fn(&[Arg<'_>]) -> i32 + Send + Sync>;

/// Numeric out-parameter call: fills a 4-byte little-endian slot on success.
pub type NumericOutFn = Box<dyn Fn(&mut [u8; 4]) -> i32 + Send + Sync>;

/// String out-parameter call: writes a NUL-terminated string into the buffer.
/// The buffer's length is the capacity the native side sees.
pub type StringOutFn = Box<dyn Fn(&mut [u8]) -> i32 + Send + Sync>;

/// Transform call: string in, string out through a caller-allocated buffer.
pub type TransformFn = Box<dyn Fn(&str, &mut [u8]) -> i32 + Send + Sync>;

/// Open the update pipe: endpoint path and timeout in milliseconds.
pub type ConnectFn = Box<dyn Fn(&str, u64) -> i32 + Send + Sync>;

/// Close the update pipe. Infallible by contract.
pub type CloseFn = Box<dyn Fn() + Send + Sync>;

/// Pipe-proxied call: JSON request text in, JSON response text out.
pub type PipeJsonFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Pipe-proxied wait call: sequence number and timeout as positional values.
pub type PipeWaitFn = Box<dyn Fn(u32, u64) -> String + Send + Sync>;

/// Pipe-proxied signal call: no request; the response is a bare JSON value
/// (`1` marks success rather than a status code).
pub type PipeSignalFn = Box<dyn Fn() -> String + Send + Sync>;
