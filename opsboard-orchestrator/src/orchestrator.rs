//! Trigger dispatch and per-operation state tracking.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use tokio::sync::Notify;

use opsboard_core::{FailureKind, OperationKey, OperationRecord, OperationStatus, Params};
use opsboard_session::SessionContext;

use crate::journal::Settlement;
use crate::registry::OperationRegistry;

/// Immediate outcome of a trigger.
///
/// Results are observed via state; callers that treat triggers as
/// fire-and-forget can ignore this.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TriggerOutcome {
    /// The call was dispatched; the operation is Pending.
    Started,
    /// Rejected: an attempt for this key is already in flight. No state
    /// change.
    AlreadyPending,
    /// A presence rule failed; the operation is Failed with its fixed
    /// validation message and no call was issued.
    InvalidParams,
    /// The key is not registered. No state change.
    UnknownOperation,
}

struct Inner {
    registry: OperationRegistry,
    session: SessionContext,
    states: RwLock<HashMap<OperationKey, OperationRecord>>,
    journal: RwLock<HashMap<OperationKey, Vec<Settlement>>>,
    settled: Notify,
}

/// Tracks a named set of independent remote operations.
///
/// One state slot per registered key. A trigger moves the slot to Pending
/// before the call is issued; a background task applies the settlement
/// exactly once. At most one attempt per key is in flight: triggering a
/// Pending operation is rejected, so an older response can never overwrite
/// a newer one. Distinct keys are fully independent.
///
/// The public surface never panics and never returns `Err`; every failure is
/// absorbed into the operation's Failed state with its fixed display
/// message.
///
/// Cloning is cheap and clones observe the same state.
#[derive(Clone)]
pub struct Orchestrator {
    inner: Arc<Inner>,
}

impl Orchestrator {
    /// Build an orchestrator over a registry. Every registered key starts
    /// Idle.
    ///
    /// The session context is read on every call for the bearer credential;
    /// the orchestrator never writes to it.
    #[must_use]
    pub fn new(registry: OperationRegistry, session: SessionContext) -> Self {
        let states = registry
            .keys()
            .map(|key| (key.clone(), OperationRecord::idle()))
            .collect();
        Self {
            inner: Arc::new(Inner {
                registry,
                session,
                states: RwLock::new(states),
                journal: RwLock::new(HashMap::new()),
                settled: Notify::new(),
            }),
        }
    }

    /// Trigger one operation.
    ///
    /// The Pending transition (or the validation short-circuit to Failed) is
    /// applied before this method returns, so an observer polling
    /// immediately afterwards never sees stale state. Settlement happens on
    /// a spawned task; call within a tokio runtime.
    pub fn trigger(&self, key: &str, params: Params) -> TriggerOutcome {
        let Some(registration) = self.inner.registry.get(key) else {
            tracing::warn!(key, "trigger for unregistered operation");
            return TriggerOutcome::UnknownOperation;
        };

        {
            let mut states = write(&self.inner.states);
            let record = states.entry(OperationKey::from(key)).or_default();

            if record.status == OperationStatus::Pending {
                tracing::debug!(key, "trigger rejected, attempt already in flight");
                return TriggerOutcome::AlreadyPending;
            }

            if !registration.validate(&params) {
                tracing::debug!(key, "presence check failed, no call issued");
                record.fail(
                    FailureKind::Validation,
                    registration.validation_message.clone(),
                );
                let settlement = Settlement::from_record(record);
                drop(states);
                self.append_settlement(key, settlement);
                self.inner.settled.notify_waiters();
                return TriggerOutcome::InvalidParams;
            }

            record.begin();
        }

        tracing::debug!(key, "dispatching call");

        let connector = Arc::clone(&registration.connector);
        let fallback = registration.fallback_message.clone();
        let inner = Arc::clone(&self.inner);
        let task_key = OperationKey::from(key);

        tokio::spawn(async move {
            let bearer = inner.session.bearer();
            let outcome = connector.call(params, bearer.as_ref()).await;

            let settlement = {
                let mut states = write(&inner.states);
                let record = states.entry(task_key.clone()).or_default();
                match outcome {
                    Ok(payload) => record.succeed(payload),
                    Err(err) => {
                        tracing::warn!(
                            key = %task_key,
                            error = %err,
                            "call failed, storing fallback message"
                        );
                        record.fail(err.kind(), fallback);
                    }
                }
                Settlement::from_record(record)
            };

            write(&inner.journal)
                .entry(task_key)
                .or_default()
                .push(settlement);
            inner.settled.notify_waiters();
        });

        TriggerOutcome::Started
    }

    /// Current status for a key. Unregistered keys read as Idle.
    pub fn status_of(&self, key: &str) -> OperationStatus {
        read(&self.inner.states)
            .get(key)
            .map(|record| record.status)
            .unwrap_or(OperationStatus::Idle)
    }

    /// Last result payload. Present only while Succeeded.
    pub fn result_of(&self, key: &str) -> Option<Value> {
        read(&self.inner.states)
            .get(key)
            .and_then(|record| record.result.clone())
    }

    /// Last display message. Present only while Failed.
    pub fn error_of(&self, key: &str) -> Option<String> {
        read(&self.inner.states)
            .get(key)
            .and_then(|record| record.error.clone())
    }

    /// Snapshot of the full record for a key.
    pub fn record_of(&self, key: &str) -> Option<OperationRecord> {
        read(&self.inner.states).get(key).cloned()
    }

    /// Settled attempts for a key, oldest first.
    pub fn history_of(&self, key: &str) -> Vec<Settlement> {
        read(&self.inner.journal)
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    /// The registered operation keys, in no particular order.
    pub fn keys(&self) -> Vec<OperationKey> {
        self.inner.registry.keys().cloned().collect()
    }

    /// Wait until the key is not Pending, returning the status seen.
    ///
    /// Returns immediately for Idle and terminal states. No internal
    /// timeout: if the remote never answers this waits forever, so callers
    /// needing bounded latency wrap it in `tokio::time::timeout`.
    pub async fn settled(&self, key: &str) -> OperationStatus {
        loop {
            let notified = self.inner.settled.notified();
            tokio::pin!(notified);
            // Register before the status check so a settlement landing
            // between check and await is not missed.
            notified.as_mut().enable();

            let status = self.status_of(key);
            if status != OperationStatus::Pending {
                return status;
            }
            notified.await;
        }
    }

    fn append_settlement(&self, key: &str, settlement: Settlement) {
        write(&self.inner.journal)
            .entry(OperationKey::from(key))
            .or_default()
            .push(settlement);
    }
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
