//! Marshaling layer for the "status code + caller-allocated buffer" convention.
//!
//! The native side signals success with status `0` and fills out-parameters the
//! caller allocated. This crate turns that into typed results:
//! - [`OutputBuffer`] — a fixed-capacity, zero-filled write target,
//! - [`extract_cstring`] — read a string back out up to the first NUL,
//! - the call-shape adapters [`status_call`], [`numeric_call`], [`string_call`] —
//!   out-parameters are surfaced only when the status code is success.
//!
//! No call shape has an error path: failures collapse to `false` or `None`.

pub mod adapter;
pub mod buffer;
pub mod cstr;

pub use adapter::{numeric_call, status_call, string_call, STATUS_OK};
pub use buffer::{OutputBuffer, MAX_CAPACITY};
pub use cstr::extract_cstring;
