//! Public client surface + builder.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::TrackerError;

const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
const USER_AGENT: &str = concat!("stock-tracker/", env!("CARGO_PKG_VERSION"));

/// Environment variable [`AvClient::from_env`] reads the API key from.
pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";

/// Client for the Alpha Vantage query endpoint.
///
/// Holds the HTTP client, the endpoint base, and the API key. The key is an
/// explicit configuration value supplied at construction; its validity is not
/// checked locally and only surfaces as an unexpected response shape.
#[derive(Debug, Clone)]
pub struct AvClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl AvClient {
    /// Create a new builder.
    pub fn builder() -> AvClientBuilder {
        AvClientBuilder::default()
    }

    /// Build a client whose API key comes from the `ALPHAVANTAGE_API_KEY`
    /// environment variable.
    pub fn from_env() -> Result<Self, TrackerError> {
        let key = std::env::var(API_KEY_ENV)
            .map_err(|_| TrackerError::Config(format!("{API_KEY_ENV} is not set")))?;
        Self::builder().api_key(key).build()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct AvClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl AvClientBuilder {
    /// Set the API key. Required; must be non-empty.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the query endpoint base (useful for tests).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<AvClient, TrackerError> {
        let api_key = self.api_key.unwrap_or_default();
        if api_key.is_empty() {
            return Err(TrackerError::Config("api key must not be empty".into()));
        }

        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(AvClient {
            http,
            base_url,
            api_key,
        })
    }
}
