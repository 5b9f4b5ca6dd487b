//! Safe calling surface over a native licensing function table.
//!
//! licbridge wraps a foreign function table that reports success through
//! numeric status codes and fills caller-allocated buffers, plus a handful of
//! long-running update operations proxied over a timed out-of-process pipe
//! with a JSON envelope.
//!
//! # Crate Structure
//!
//! - [`table`] — Capability set over the injected native entry points
//! - [`marshal`] — Output buffers, C-string extraction, call-shape adapters
//! - [`pipe`] — Pipe endpoint, JSON envelopes, scoped session
//! - [`client`] — The public facade, [`client::LicenseClient`]
//! - [`config`] — Injected configuration (environment read once at startup)
//! - [`bypass`] — The dev-license bypass check, the one hard-failure surface

pub mod bypass;
pub mod client;
pub mod config;

/// Re-export function table types.
pub mod table {
    pub use licbridge_table::*;
}

/// Re-export marshaling types.
pub mod marshal {
    pub use licbridge_marshal::*;
}

/// Re-export pipe types.
pub mod pipe {
    pub use licbridge_pipe::*;
}

pub use bypass::{verify_dev_license, BypassError};
pub use client::{json_to_canonical_with, LicenseClient, DEFAULT_STRING_CAPACITY};
pub use config::{ClientConfig, IdentityConfig};
