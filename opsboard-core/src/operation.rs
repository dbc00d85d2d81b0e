//! Operation identity and per-operation lifecycle state.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::FailureKind;

/// Names one remote interaction kind (e.g. `"submit-payment"`).
///
/// Just a string underneath, with no format requirement. Keys are unique
/// within a registry; the orchestrator tracks one state slot per key.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationKey(pub String);

impl OperationKey {
    /// Create a new key from anything that converts to String.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OperationKey {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for OperationKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Allows `HashMap<OperationKey, _>` lookups by `&str`.
impl Borrow<str> for OperationKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Lifecycle status of one operation slot.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    /// Never triggered since orchestrator initialization.
    Idle,
    /// A call is in flight. Result and error are both empty.
    Pending,
    /// The last attempt settled with a well-formed response.
    Succeeded,
    /// The last attempt settled with an absorbed failure.
    Failed,
}

impl OperationStatus {
    /// Whether the operation has settled and may be re-triggered.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationStatus::Succeeded | OperationStatus::Failed)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperationStatus::Idle => "idle",
            OperationStatus::Pending => "pending",
            OperationStatus::Succeeded => "succeeded",
            OperationStatus::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// The orchestrator's state slot for one operation key.
///
/// Invariant: outside Idle/Pending exactly one of `result`/`error` is
/// populated, and only in the matching terminal status. All transitions go
/// through [`begin`](Self::begin), [`succeed`](Self::succeed) and
/// [`fail`](Self::fail), which maintain this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRecord {
    /// Current lifecycle status.
    pub status: OperationStatus,
    /// Last result payload. Present only while Succeeded.
    pub result: Option<serde_json::Value>,
    /// Last display message. Present only while Failed.
    pub error: Option<String>,
    /// Classification of the last failure. Present only while Failed.
    pub failure: Option<FailureKind>,
}

impl OperationRecord {
    /// A fresh slot that has never been triggered.
    pub fn idle() -> Self {
        Self {
            status: OperationStatus::Idle,
            result: None,
            error: None,
            failure: None,
        }
    }

    /// Transition into Pending, clearing any previous outcome.
    pub fn begin(&mut self) {
        self.status = OperationStatus::Pending;
        self.result = None;
        self.error = None;
        self.failure = None;
    }

    /// Settle with a well-formed result payload.
    pub fn succeed(&mut self, payload: serde_json::Value) {
        self.status = OperationStatus::Succeeded;
        self.result = Some(payload);
        self.error = None;
        self.failure = None;
    }

    /// Settle with an absorbed failure and its fixed display message.
    pub fn fail(&mut self, kind: FailureKind, message: impl Into<String>) {
        self.status = OperationStatus::Failed;
        self.result = None;
        self.error = Some(message.into());
        self.failure = Some(kind);
    }
}

impl Default for OperationRecord {
    fn default() -> Self {
        Self::idle()
    }
}
