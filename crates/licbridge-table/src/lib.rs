//! Explicit capability set over the externally supplied native function table.
//!
//! The native library reports success and failure through integer status codes
//! and fills caller-allocated buffers. This crate pins that surface down to a
//! fixed set of named operations, one closure per operation, with one signature
//! per call shape. A table is complete by construction: [`FunctionTableBuilder`]
//! refuses to build while any required capability is missing, so the layers
//! above never have to probe for an entry point at call time.

pub mod capability;
pub mod error;
pub mod ops;
pub mod table;

pub use capability::{
    Arg, CloseFn, ConnectFn, NumericOutFn, PipeJsonFn, PipeSignalFn, PipeWaitFn, StatusFn,
    StringOutFn, TransformFn,
};
pub use error::{Result, TableError};
pub use table::{FunctionTable, FunctionTableBuilder};
