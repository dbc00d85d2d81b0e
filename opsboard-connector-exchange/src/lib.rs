#![deny(missing_docs)]
//! Crypto exchange connector (outbound payouts).
//!
//! Implements [`Connector`](opsboard_core::Connector) for the exchange's
//! withdrawal endpoint (OKX-compatible path shape). Expected fields:
//! `recipient`, `amount`, optionally `currency`. Presence checks happen in
//! the orchestrator's registry, not here.

pub mod client;

pub use client::{Exchange, DEFAULT_CURRENCY, SUPPORTED_CURRENCIES};

// Re-export the boundary types for convenience
pub use opsboard_core::{Connector, ConnectorError};
