//! The connector boundary: one client per remote collaborator.

use async_trait::async_trait;
use serde_json::Value;

use crate::credential::BearerToken;
use crate::error::ConnectorError;
use crate::params::Params;

/// A client for one remote collaborator endpoint.
///
/// Implementations issue exactly one outbound call per invocation and map
/// every failure into [`ConnectorError`]; they never panic. The trait is
/// object-safe so the operation registry can hold heterogeneous connectors
/// behind `Arc<dyn Connector>`.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Dispatch one call with the given parameters.
    ///
    /// When a bearer credential is supplied it must be attached to the
    /// outbound request. The returned value is the operation's result
    /// payload, stored verbatim by the orchestrator.
    async fn call(
        &self,
        params: Params,
        bearer: Option<&BearerToken>,
    ) -> Result<Value, ConnectorError>;
}
