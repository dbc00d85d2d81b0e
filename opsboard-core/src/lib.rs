#![deny(missing_docs)]
//! Shared types and traits for opsboard.
//!
//! This crate is the vocabulary of the dashboard's request layer: operation
//! keys and lifecycle state, invocation parameters, the bearer credential
//! newtype, the shared error taxonomy, and the [`Connector`] boundary that
//! each remote collaborator client implements.
//!
//! Behavior lives elsewhere: connector clients in the
//! `opsboard-connector-*` crates, state tracking in
//! `opsboard-orchestrator`.

pub mod connector;
pub mod credential;
pub mod error;
pub mod operation;
pub mod params;

pub use connector::Connector;
pub use credential::BearerToken;
pub use error::{ConnectorError, FailureKind};
pub use operation::{OperationKey, OperationRecord, OperationStatus};
pub use params::Params;
