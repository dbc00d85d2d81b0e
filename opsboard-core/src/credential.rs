//! Bearer credential vocabulary.
//!
//! The credential itself lives in the process-wide session context
//! (`opsboard-session`); this is just the newtype that crosses the connector
//! boundary.

use std::fmt;

/// An opaque bearer credential attached to outbound calls.
///
/// `Debug` output is redacted so the credential cannot leak through logs or
/// panic messages.
#[derive(Clone, Eq, PartialEq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw credential.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw credential, for building the `Authorization` header.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BearerToken(****)")
    }
}

impl From<&str> for BearerToken {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for BearerToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}
