//! The in-memory settlement journal.
//!
//! Every terminal transition is appended here, one entry per attempt, so the
//! presentation layer can render a payment-history table. In-memory only;
//! the journal dies with the process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use opsboard_core::{FailureKind, OperationRecord, OperationStatus};

/// One settled attempt for an operation key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    /// Synthesized attempt identifier.
    pub attempt_id: String,
    /// When the attempt reached its terminal status.
    pub finished_at: DateTime<Utc>,
    /// Terminal status of the attempt (Succeeded or Failed).
    pub status: OperationStatus,
    /// The result payload, when the attempt succeeded.
    pub result: Option<Value>,
    /// The display message, when the attempt failed.
    pub error: Option<String>,
    /// Failure classification, when the attempt failed.
    pub failure: Option<FailureKind>,
}

impl Settlement {
    /// Snapshot a record that just reached a terminal status.
    pub(crate) fn from_record(record: &OperationRecord) -> Self {
        Self {
            attempt_id: format!("att_{}", uuid::Uuid::new_v4()),
            finished_at: Utc::now(),
            status: record.status,
            result: record.result.clone(),
            error: record.error.clone(),
            failure: record.failure,
        }
    }
}
