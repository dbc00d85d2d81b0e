//! Gateway client struct and builder.

use async_trait::async_trait;
use serde_json::Value;

use opsboard_core::{BearerToken, Connector, ConnectorError, Params};

/// Default payment gateway base URL.
const DEFAULT_BASE_URL: &str = "https://www.saferpay.com";

/// Environment variable overriding the base URL.
const BASE_URL_ENV: &str = "OPSBOARD_GATEWAY_URL";

/// Currency applied when the caller does not pick one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Currencies offered by the dashboard's selector.
pub const SUPPORTED_CURRENCIES: [&str; 4] = ["EUR", "USD", "GBP", "CHF"];

/// Client for the payment gateway's outbound payment endpoint.
///
/// # Example
///
/// ```no_run
/// use opsboard_connector_gateway::Gateway;
///
/// let client = Gateway::new().base_url("https://www.saferpay.com");
/// ```
pub struct Gateway {
    /// API base URL (override for testing or proxies).
    pub(crate) base_url: String,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl Gateway {
    /// Create a new client with the default base URL.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client, honouring the `OPSBOARD_GATEWAY_URL` override.
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

    /// Build the payments endpoint URL.
    pub(crate) fn payments_url(&self) -> String {
        format!("{}/api/v1/payments", self.base_url)
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connector for Gateway {
    /// Submit one outbound payment.
    ///
    /// Parameters are sent as the JSON body. A missing `currency` defaults
    /// to [`DEFAULT_CURRENCY`]; the caller's copy is untouched.
    async fn call(
        &self,
        params: Params,
        bearer: Option<&BearerToken>,
    ) -> Result<Value, ConnectorError> {
        let url = self.payments_url();

        let mut body = params;
        if !body.has_text("currency") {
            body = body.with("currency", DEFAULT_CURRENCY);
        }

        tracing::debug!(url = %url, "submitting outbound payment");

        let mut request = self.client.post(&url).json(&body.into_value());
        if let Some(token) = bearer {
            request = request.bearer_auth(token.secret());
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
        let client = Gateway::new();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn builder_overrides_base_url() {
        let client = Gateway::new().base_url("http://localhost:9999");
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn payments_url_includes_path() {
        let client = Gateway::new().base_url("http://localhost:9999");
        assert_eq!(client.payments_url(), "http://localhost:9999/api/v1/payments");
    }

    #[test]
    fn euro_is_the_default_currency() {
        assert_eq!(DEFAULT_CURRENCY, "EUR");
        assert!(SUPPORTED_CURRENCIES.contains(&DEFAULT_CURRENCY));
    }
}
