//! The operation registry: connector, display messages, and presence rules
//! per operation key.

use std::collections::HashMap;
use std::sync::Arc;

use opsboard_core::{Connector, OperationKey, Params};

/// Fixed message for operations registered without custom fallback text.
pub const DEFAULT_FALLBACK: &str = "The request could not be completed.";

/// Fixed message for operations registered without custom validation text.
pub const DEFAULT_VALIDATION: &str = "Required fields are missing.";

/// A presence rule checked before any remote call is issued.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Rule {
    /// The field must exist and hold a non-empty string.
    NonEmptyText(String),
    /// The field must parse as a number greater than zero.
    PositiveNumber(String),
}

impl Rule {
    fn holds(&self, params: &Params) -> bool {
        match self {
            Rule::NonEmptyText(field) => params.has_text(field),
            Rule::PositiveNumber(field) => params.has_positive(field),
        }
    }
}

/// One registered operation: its connector plus the fixed display messages.
///
/// The fallback message is what the display layer sees when the call fails,
/// whatever the underlying cause; raw transport errors stay in the logs.
#[derive(Clone)]
pub struct Registration {
    pub(crate) connector: Arc<dyn Connector>,
    pub(crate) fallback_message: String,
    pub(crate) validation_message: String,
    pub(crate) rules: Vec<Rule>,
}

impl Registration {
    /// Register a connector with the default display messages.
    #[must_use]
    pub fn new(connector: impl Connector + 'static) -> Self {
        Self {
            connector: Arc::new(connector),
            fallback_message: DEFAULT_FALLBACK.into(),
            validation_message: DEFAULT_VALIDATION.into(),
            rules: Vec::new(),
        }
    }

    /// Fixed message shown when the call fails.
    #[must_use]
    pub fn fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Fixed message shown when a presence rule fails.
    #[must_use]
    pub fn validation_message(mut self, message: impl Into<String>) -> Self {
        self.validation_message = message.into();
        self
    }

    /// Require a non-empty string field.
    #[must_use]
    pub fn require_text(mut self, field: impl Into<String>) -> Self {
        self.rules.push(Rule::NonEmptyText(field.into()));
        self
    }

    /// Require a positive numeric field.
    #[must_use]
    pub fn require_positive(mut self, field: impl Into<String>) -> Self {
        self.rules.push(Rule::PositiveNumber(field.into()));
        self
    }

    /// Whether the parameters pass every presence rule.
    pub(crate) fn validate(&self, params: &Params) -> bool {
        self.rules.iter().all(|rule| rule.holds(params))
    }
}

/// A named set of independent remote operations.
#[derive(Clone, Default)]
pub struct OperationRegistry {
    entries: HashMap<OperationKey, Registration>,
}

impl OperationRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration. Re-registering a key replaces the entry.
    #[must_use]
    pub fn register(mut self, key: impl Into<OperationKey>, registration: Registration) -> Self {
        self.entries.insert(key.into(), registration);
        self
    }

    /// Look up a registration by key.
    pub fn get(&self, key: &str) -> Option<&Registration> {
        self.entries.get(key)
    }

    /// The registered keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &OperationKey> {
        self.entries.keys()
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no operations are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
