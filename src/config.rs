//! Client configuration
//!
//! Every [`crate::Elink`] instance owns its own configuration; there is no
//! process-wide target URL or token.

use crate::error::Result;
use std::time::Duration;
use url::Url;

/// Default service endpoint (the E-Link review environment).
pub const DEFAULT_TARGET: &str = "https://review.osti.gov/elink2api/";

/// Configuration for the E-Link client
#[derive(Debug, Clone)]
pub struct ElinkConfig {
    /// Base URL of the service API root, always ending in a slash
    base_url: Url,
    /// API token sent as a bearer credential with every request
    token: Option<String>,
    /// Request timeout
    timeout: Duration,
    /// User agent string
    user_agent: String,
}

impl ElinkConfig {
    /// Create a new config builder
    pub fn builder() -> ElinkConfigBuilder {
        ElinkConfigBuilder::default()
    }

    /// Configuration with the given token against the default target
    pub fn with_token(token: impl Into<String>) -> Self {
        ElinkConfigBuilder::default()
            .token(token)
            .build()
            .expect("default target URL is valid")
    }

    /// The API root this client targets
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The bearer token, if one was configured
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// User agent string
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Path portion of the API root, e.g. `/elink2api/`.
    ///
    /// Page links returned by the service carry this prefix; stripping it
    /// yields the relative path a later fetch re-joins against the base URL.
    pub fn api_path(&self) -> &str {
        self.base_url.path()
    }

    /// Join a relative path (possibly with a query string) onto the API root
    pub fn join(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

impl Default for ElinkConfig {
    fn default() -> Self {
        ElinkConfigBuilder::default()
            .build()
            .expect("default target URL is valid")
    }
}

/// Builder for [`ElinkConfig`]
#[derive(Debug, Clone)]
pub struct ElinkConfigBuilder {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
    user_agent: String,
}

impl Default for ElinkConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TARGET.to_string(),
            token: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("elink2/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ElinkConfigBuilder {
    /// Set the target API root URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API token
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the config, parsing and normalizing the base URL.
    ///
    /// The URL path is given a trailing slash if missing so relative
    /// operation paths join underneath it rather than replacing the last
    /// segment.
    pub fn build(self) -> Result<ElinkConfig> {
        let mut raw = self.base_url;
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw)?;

        Ok(ElinkConfig {
            base_url,
            token: self.token,
            timeout: self.timeout,
            user_agent: self.user_agent,
        })
    }
}
