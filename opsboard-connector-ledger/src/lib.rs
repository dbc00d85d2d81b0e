#![deny(missing_docs)]
//! Accounting platform connector (invoice retrieval).
//!
//! Implements [`Connector`](opsboard_core::Connector) for the accounting
//! platform's invoice listing endpoint (Xero-compatible path shape). The
//! response payload is opaque to the dashboard and stored verbatim.

pub mod client;

pub use client::Ledger;

// Re-export the boundary types for convenience
pub use opsboard_core::{Connector, ConnectorError};
