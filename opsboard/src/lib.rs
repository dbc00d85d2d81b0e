#![deny(missing_docs)]
//! Umbrella crate wiring the stock dashboard operations.
//!
//! Dashboard components tend to re-derive the same trigger/catch/fallback
//! logic per call site. Here the four stock operations are registered once,
//! with one table of fixed display messages, and every call site goes
//! through the same [`Orchestrator`].
//!
//! # Example
//!
//! ```no_run
//! use opsboard::{keys, standard_orchestrator, Params, SessionContext};
//!
//! # async fn demo() {
//! let session = SessionContext::with_bearer("access-token");
//! let orchestrator = standard_orchestrator(session);
//!
//! orchestrator.trigger(keys::FETCH_RECORDS, Params::new());
//! orchestrator.trigger(
//!     keys::SUBMIT_PAYMENT,
//!     Params::new()
//!         .with("recipient", "DE0012345678901234")
//!         .with("amount", 100)
//!         .with("currency", "EUR"),
//! );
//!
//! let status = orchestrator.settled(keys::SUBMIT_PAYMENT).await;
//! # let _ = status;
//! # }
//! ```

pub use opsboard_core::{
    BearerToken, Connector, ConnectorError, FailureKind, OperationKey, OperationRecord,
    OperationStatus, Params,
};
pub use opsboard_orchestrator::{
    OperationRegistry, Orchestrator, Registration, Settlement, TriggerOutcome,
};
pub use opsboard_session::SessionContext;

#[cfg(feature = "assistant")]
pub use opsboard_connector_assistant::Assistant;
#[cfg(feature = "exchange")]
pub use opsboard_connector_exchange::Exchange;
#[cfg(feature = "gateway")]
pub use opsboard_connector_gateway::Gateway;
#[cfg(feature = "ledger")]
pub use opsboard_connector_ledger::Ledger;

/// Stable keys for the stock operations.
pub mod keys {
    /// Invoice retrieval from the accounting platform.
    pub const FETCH_RECORDS: &str = "fetch-records";
    /// Outbound fiat payment through the gateway.
    pub const SUBMIT_PAYMENT: &str = "submit-payment";
    /// Crypto payout through the exchange.
    pub const SUBMIT_CRYPTO_PAYMENT: &str = "submit-crypto-payment";
    /// Question to the assistant endpoint.
    pub const QUERY_ASSISTANT: &str = "query-assistant";
}

/// Fixed display messages for the stock operations.
///
/// These are what the presentation layer shows; raw transport errors never
/// leave the logs. A failed call always surfaces its operation's error
/// message, never a success-sounding one.
pub mod messages {
    /// Shown when invoice retrieval fails.
    pub const FETCH_RECORDS_FAILED: &str = "Could not retrieve accounting records.";
    /// Shown when an outbound payment fails.
    pub const PAYMENT_FAILED: &str = "The payment could not be processed.";
    /// Shown when a crypto payout fails.
    pub const CRYPTO_PAYMENT_FAILED: &str = "The crypto transfer could not be processed.";
    /// Shown when the assistant cannot be reached or answers unusably.
    pub const ASSISTANT_FAILED: &str = "The assistant could not be reached.";
    /// Shown when payment fields fail the presence check.
    pub const PAYMENT_INVALID: &str = "A recipient and a positive amount are required.";
    /// Shown when the assistant question is missing.
    pub const ASSISTANT_INVALID: &str = "A question is required.";
}

/// The registry of stock operations, with connectors built from the
/// environment (`OPSBOARD_*_URL` overrides).
#[cfg(all(
    feature = "ledger",
    feature = "gateway",
    feature = "exchange",
    feature = "assistant"
))]
#[must_use]
pub fn standard_registry() -> OperationRegistry {
    OperationRegistry::new()
        .register(
            keys::FETCH_RECORDS,
            Registration::new(Ledger::from_env())
                .fallback_message(messages::FETCH_RECORDS_FAILED),
        )
        .register(
            keys::SUBMIT_PAYMENT,
            Registration::new(Gateway::from_env())
                .fallback_message(messages::PAYMENT_FAILED)
                .validation_message(messages::PAYMENT_INVALID)
                .require_text("recipient")
                .require_positive("amount"),
        )
        .register(
            keys::SUBMIT_CRYPTO_PAYMENT,
            Registration::new(Exchange::from_env())
                .fallback_message(messages::CRYPTO_PAYMENT_FAILED)
                .validation_message(messages::PAYMENT_INVALID)
                .require_text("recipient")
                .require_positive("amount"),
        )
        .register(
            keys::QUERY_ASSISTANT,
            Registration::new(Assistant::from_env())
                .fallback_message(messages::ASSISTANT_FAILED)
                .validation_message(messages::ASSISTANT_INVALID)
                .require_text("question"),
        )
}

/// An orchestrator over [`standard_registry`].
#[cfg(all(
    feature = "ledger",
    feature = "gateway",
    feature = "exchange",
    feature = "assistant"
))]
#[must_use]
pub fn standard_orchestrator(session: SessionContext) -> Orchestrator {
    Orchestrator::new(standard_registry(), session)
}

#[cfg(test)]
#[cfg(all(
    feature = "ledger",
    feature = "gateway",
    feature = "exchange",
    feature = "assistant"
))]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_the_four_stock_operations() {
        let registry = standard_registry();
        assert_eq!(registry.len(), 4);
        for key in [
            keys::FETCH_RECORDS,
            keys::SUBMIT_PAYMENT,
            keys::SUBMIT_CRYPTO_PAYMENT,
            keys::QUERY_ASSISTANT,
        ] {
            assert!(registry.get(key).is_some(), "missing registration: {key}");
        }
    }

    #[tokio::test]
    async fn standard_orchestrator_starts_idle() {
        let orchestrator = standard_orchestrator(SessionContext::new());
        for key in orchestrator.keys() {
            assert_eq!(orchestrator.status_of(key.as_str()), OperationStatus::Idle);
        }
    }
}
