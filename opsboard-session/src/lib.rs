#![deny(missing_docs)]
//! The process-wide session context.
//!
//! One credential, one place, with explicit rules: initialized once on
//! load, read by the orchestrator on every call, never mutated by the
//! orchestrator itself. Only the host application (login/logout flows)
//! writes to it.

use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use opsboard_core::BearerToken;

static GLOBAL: OnceLock<SessionContext> = OnceLock::new();

/// Cloneable handle to the shared session state.
///
/// Clones observe the same underlying state. For the common single-context
/// case, [`install`](Self::install) publishes a handle process-wide and
/// [`current`](Self::current) retrieves it.
#[derive(Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<SessionState>>,
}

#[derive(Default)]
struct SessionState {
    bearer: Option<BearerToken>,
}

impl SessionContext {
    /// A context with no credential.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context carrying a bearer credential from the start.
    #[must_use]
    pub fn with_bearer(token: impl Into<BearerToken>) -> Self {
        let ctx = Self::new();
        ctx.set_bearer(token);
        ctx
    }

    /// The current bearer credential, if any. Read on every outbound call.
    pub fn bearer(&self) -> Option<BearerToken> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .bearer
            .clone()
    }

    /// Store a bearer credential (login).
    pub fn set_bearer(&self, token: impl Into<BearerToken>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .bearer = Some(token.into());
    }

    /// Drop the bearer credential (logout).
    pub fn clear_bearer(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .bearer = None;
    }

    /// Publish this context process-wide. Call once, on load.
    pub fn install(self) -> Result<(), SessionError> {
        GLOBAL.set(self).map_err(|_| SessionError::AlreadyInstalled)
    }

    /// The installed process-wide context, if one was published.
    pub fn current() -> Option<SessionContext> {
        GLOBAL.get().cloned()
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_bearer = self.bearer().is_some();
        f.debug_struct("SessionContext")
            .field("bearer", &has_bearer)
            .finish()
    }
}

/// Errors from session context management.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A process-wide context was already installed.
    #[error("session context already installed")]
    AlreadyInstalled,
}
