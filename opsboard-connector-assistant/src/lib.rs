#![deny(missing_docs)]
//! Assistant chat endpoint connector.
//!
//! Implements [`Connector`](opsboard_core::Connector) for the dashboard's
//! assistant endpoint. The collaborator is loosely specified: deployments
//! answer with `{"reply": ...}`, `{"response": ...}`, or a bare string, and
//! the mapping tolerates all three (see [`mapping::extract_reply`]).

pub mod client;
pub mod mapping;

pub use client::Assistant;
pub use mapping::GENERIC_ACK;

// Re-export the boundary types for convenience
pub use opsboard_core::{Connector, ConnectorError};
