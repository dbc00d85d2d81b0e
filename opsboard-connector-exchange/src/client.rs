//! Exchange client struct and builder.

use async_trait::async_trait;
use serde_json::Value;

use opsboard_core::{BearerToken, Connector, ConnectorError, Params};

/// Default exchange base URL.
const DEFAULT_BASE_URL: &str = "https://www.okx.com";

/// Environment variable overriding the base URL.
const BASE_URL_ENV: &str = "OPSBOARD_EXCHANGE_URL";

/// Currency applied when the caller does not pick one.
pub const DEFAULT_CURRENCY: &str = "BTC";

/// Currencies offered by the dashboard's selector.
pub const SUPPORTED_CURRENCIES: [&str; 3] = ["BTC", "ETH", "USDT"];

/// Client for the exchange's withdrawal endpoint.
///
/// # Example
///
/// ```no_run
/// use opsboard_connector_exchange::Exchange;
///
/// let client = Exchange::new().base_url("https://www.okx.com");
/// ```
pub struct Exchange {
    /// API base URL (override for testing or proxies).
    pub(crate) base_url: String,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl Exchange {
    /// Create a new client with the default base URL.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client, honouring the `OPSBOARD_EXCHANGE_URL` override.
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

    /// Build the withdrawal endpoint URL.
    pub(crate) fn withdrawal_url(&self) -> String {
        format!("{}/api/v5/asset/withdrawal", self.base_url)
    }
}

impl Default for Exchange {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connector for Exchange {
    /// Submit one crypto payout.
    ///
    /// Parameters are sent as the JSON body. A missing `currency` defaults
    /// to [`DEFAULT_CURRENCY`]; the caller's copy is untouched.
    async fn call(
        &self,
        params: Params,
        bearer: Option<&BearerToken>,
    ) -> Result<Value, ConnectorError> {
        let url = self.withdrawal_url();

        let mut body = params;
        if !body.has_text("currency") {
            body = body.with("currency", DEFAULT_CURRENCY);
        }

        tracing::debug!(url = %url, "submitting crypto payout");

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
