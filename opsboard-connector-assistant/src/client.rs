//! Assistant client struct and builder.

use async_trait::async_trait;
use serde_json::Value;

use opsboard_core::{BearerToken, Connector, ConnectorError, Params};

use crate::mapping::extract_reply;

/// Default assistant endpoint base URL (the dashboard's own backend).
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Environment variable overriding the base URL.
const BASE_URL_ENV: &str = "OPSBOARD_ASSISTANT_URL";

/// Client for the assistant chat endpoint.
///
/// # Example
///
/// ```no_run
/// use opsboard_connector_assistant::Assistant;
///
/// let client = Assistant::new()
///     .base_url("http://localhost:3000")
///     .context_prefix("Back-office dashboard: ");
/// ```
pub struct Assistant {
    /// API base URL (override for testing or remote deployments).
    pub(crate) base_url: String,
    /// Fixed text prepended to every question before dispatch.
    pub(crate) context_prefix: Option<String>,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl Assistant {
    /// Create a new client with the default base URL and no prefix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            context_prefix: None,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client, honouring the `OPSBOARD_ASSISTANT_URL` override.
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

    /// Prepend a fixed product-context string to every question.
    #[must_use]
    pub fn context_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.context_prefix = Some(prefix.into());
        self
    }

    /// Build the query endpoint URL.
    pub(crate) fn query_url(&self) -> String {
        format!("{}/api/gpt", self.base_url)
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connector for Assistant {
    /// Send one question and return the extracted reply text.
    ///
    /// The result payload is the reply as a JSON string, so the display
    /// layer renders text rather than whichever envelope the deployment
    /// happened to use.
    async fn call(
        &self,
        params: Params,
        bearer: Option<&BearerToken>,
    ) -> Result<Value, ConnectorError> {
        let url = self.query_url();

        let mut body = params;
        if let (Some(prefix), Some(question)) = (&self.context_prefix, body.str("question")) {
            let prefixed = format!("{prefix}{question}");
            body = body.with("question", prefixed);
        }

        tracing::debug!(url = %url, "querying assistant");

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

        let json: Value = serde_json::from_str(&body)
            .map_err(|e| ConnectorError::Malformed(format!("invalid JSON response: {e}")))?;

        Ok(Value::String(extract_reply(&json)))
    }
}
