#![deny(missing_docs)]
//! The request-state orchestrator.
//!
//! Holds a named set of independent remote operations, exposes a trigger per
//! operation, tracks each operation's lifecycle (Idle, Pending, Succeeded,
//! Failed) without races, and projects read-only state for a presentation
//! layer. The [`OperationRegistry`] carries one fallback message table for
//! all call sites instead of each component re-deriving its own catch
//! logic.
//!
//! # Example
//!
//! ```no_run
//! use opsboard_core::Params;
//! use opsboard_orchestrator::{OperationRegistry, Orchestrator, Registration};
//! use opsboard_session::SessionContext;
//! # use opsboard_core::{BearerToken, Connector, ConnectorError};
//! # struct Noop;
//! # #[async_trait::async_trait]
//! # impl Connector for Noop {
//! #     async fn call(&self, p: Params, _b: Option<&BearerToken>)
//! #         -> Result<serde_json::Value, ConnectorError> { Ok(p.into_value()) }
//! # }
//!
//! # async fn demo() {
//! let registry = OperationRegistry::new().register(
//!     "submit-payment",
//!     Registration::new(Noop)
//!         .fallback_message("The payment could not be processed.")
//!         .require_text("recipient")
//!         .require_positive("amount"),
//! );
//! let orchestrator = Orchestrator::new(registry, SessionContext::new());
//!
//! orchestrator.trigger(
//!     "submit-payment",
//!     Params::new().with("recipient", "DE00...").with("amount", 100),
//! );
//! let status = orchestrator.settled("submit-payment").await;
//! # let _ = status;
//! # }
//! ```

pub mod journal;
pub mod orchestrator;
pub mod registry;

pub use journal::Settlement;
pub use orchestrator::{Orchestrator, TriggerOutcome};
pub use registry::{OperationRegistry, Registration, Rule, DEFAULT_FALLBACK, DEFAULT_VALIDATION};

// Re-export the vocabulary crate for convenience
pub use opsboard_core::{
    Connector, ConnectorError, FailureKind, OperationKey, OperationRecord, OperationStatus, Params,
};
