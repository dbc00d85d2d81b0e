//! Ledger client struct and builder.

use async_trait::async_trait;
use serde_json::Value;

use opsboard_core::{BearerToken, Connector, ConnectorError, Params};

/// Default accounting API base URL.
const DEFAULT_BASE_URL: &str = "https://api.xero.com";

/// Environment variable overriding the base URL.
const BASE_URL_ENV: &str = "OPSBOARD_LEDGER_URL";

/// Client for the accounting platform's invoice listing endpoint.
///
/// # Example
///
/// ```no_run
/// use opsboard_connector_ledger::Ledger;
///
/// let client = Ledger::new().base_url("https://api.xero.com");
/// ```
pub struct Ledger {
    /// API base URL (override for testing or proxies).
    pub(crate) base_url: String,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl Ledger {
    /// Create a new client with the default base URL.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client, honouring the `OPSBOARD_LEDGER_URL` override.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) => Self::new().base_url(url),
            Err(_) => Self::new(),
        }
    }

    /// Override the API base URL.
    ///
    /// Useful for testing with a local mock server.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Build the invoice listing endpoint URL.
    pub(crate) fn invoices_url(&self) -> String {
        format!("{}/api.xro/2.0/Invoices", self.base_url)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connector for Ledger {
    /// Fetch the invoice listing.
    ///
    /// Parameters are forwarded as query-string pairs (paging, filters).
    async fn call(
        &self,
        params: Params,
        bearer: Option<&BearerToken>,
    ) -> Result<Value, ConnectorError> {
        let url = self.invoices_url();
        tracing::debug!(url = %url, "fetching invoice records");

        let mut request = self.client.get(&url);
        if let Some(token) = bearer {
            request = request.bearer_auth(token.secret());
        }
        if !params.is_empty() {
            request = request.query(&params.query_pairs());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ConnectorError::status(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| ConnectorError::Malformed(format!("invalid JSON response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_set() {
        let client = Ledger::new();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn builder_overrides_base_url() {
        let client = Ledger::new().base_url("http://localhost:9999");
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn invoices_url_includes_path() {
        let client = Ledger::new().base_url("http://localhost:9999");
        assert_eq!(
            client.invoices_url(),
            "http://localhost:9999/api.xro/2.0/Invoices"
        );
    }

    #[test]
    fn default_impl_matches_new() {
        let client = Ledger::default();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }
}
