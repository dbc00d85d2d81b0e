#![deny(missing_docs)]
//! Fiat payment gateway connector (outbound payments).
//!
//! Implements [`Connector`](opsboard_core::Connector) for the payment
//! gateway's outbound payment endpoint (Saferpay-compatible path shape).
//! Expected fields: `recipient`, `amount`, optionally `currency` and
//! `description`. Presence checks happen in the orchestrator's registry, not
//! here.

pub mod client;

pub use client::{Gateway, DEFAULT_CURRENCY, SUPPORTED_CURRENCIES};

// Re-export the boundary types for convenience
pub use opsboard_core::{Connector, ConnectorError};
