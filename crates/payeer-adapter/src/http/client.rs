/*
[INPUT]:  HTTP configuration (endpoint, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client and generic request primitive
[UPDATE]: When adding connection options or changing envelope handling
*/

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::http::{PayeerError, Result};
use crate::types::{Envelope, Params};

/// Base URL for the Payeer API
const API_BASE_URL: &str = "https://payeer.com";
/// Path of the single API endpoint; every action is POSTed here
const API_PATH: &str = "/ajax/api/api.php";

/// HTTP client configuration.
///
/// Both timeouts default to `None`: the adapter imposes no deadline of its
/// own, callers opt in per client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// Static credentials for the Payeer API, immutable once the client is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account number in the Payeer system, e.g. `P1000000`
    pub account: String,
    /// The API user ID, given out when adding the API
    pub api_id: String,
    /// The API user's secret key
    pub api_secret: String,
}

impl Credentials {
    pub fn new(
        account: impl Into<String>,
        api_id: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            api_id: api_id.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Wire-format form fields carried by every outbound request
    fn form_fields(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("account".to_string(), self.account.clone()),
            ("apiId".to_string(), self.api_id.clone()),
            ("apiPass".to_string(), self.api_secret.clone()),
        ])
    }
}

/// Main HTTP client for the Payeer API
#[derive(Debug, Clone)]
pub struct PayeerClient {
    http_client: Client,
    api_url: Url,
    credentials: Credentials,
}

impl PayeerClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, API_BASE_URL)
    }

    /// Create a client against a non-default base URL (integration tests)
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;
        let api_url = Url::parse(base_url)?.join(API_PATH)?;

        Ok(Self {
            http_client,
            api_url,
            credentials,
        })
    }

    /// Get the credentials the client was built with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The main request primitive for the Payeer API.
    ///
    /// Merges the credential fields with `params` (call parameters win on key
    /// collision), POSTs the merged set form-encoded to the fixed endpoint,
    /// and parses the JSON envelope. A truthy `errors` field fails with
    /// [`PayeerError::Api`] carrying that field verbatim; transport and
    /// decode failures propagate as [`PayeerError::Http`] untranslated.
    pub async fn request(&self, params: Params) -> Result<Envelope> {
        let mut form = self.credentials.form_fields();
        for (key, value) in params {
            form.insert(key, value);
        }

        debug!(
            action = form.get("action").map(String::as_str).unwrap_or(""),
            "sending Payeer API request"
        );

        let response = self
            .http_client
            .post(self.api_url.clone())
            .form(&form)
            .send()
            .await?;
        let envelope: Envelope = response.json().await?;

        if let Some(errors) = envelope.reported_errors() {
            warn!(%errors, "Payeer API reported errors");
            return Err(PayeerError::Api {
                errors: errors.clone(),
            });
        }

        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_form_fields() {
        let credentials = Credentials::new("P1000000", "12345", "secret");
        let fields = credentials.form_fields();

        assert_eq!(fields.get("account").map(String::as_str), Some("P1000000"));
        assert_eq!(fields.get("apiId").map(String::as_str), Some("12345"));
        assert_eq!(fields.get("apiPass").map(String::as_str), Some("secret"));
    }

    #[test]
    fn test_api_url_joins_fixed_path() {
        let client = PayeerClient::with_config_and_base_url(
            Credentials::new("P1000000", "12345", "secret"),
            ClientConfig::default(),
            "http://127.0.0.1:8080",
        )
        .expect("client init");

        assert_eq!(
            client.api_url.as_str(),
            "http://127.0.0.1:8080/ajax/api/api.php"
        );
    }
}
