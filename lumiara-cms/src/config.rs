//! Content store configuration
//!
//! Read from the environment (a `.env` file is loaded first by the binary).

use crate::error::ConfigError;
use std::fmt;

pub const ENV_PROJECT_ID: &str = "SANITY_PROJECT_ID";
pub const ENV_TOKEN: &str = "SANITY_TOKEN";
pub const ENV_DATASET: &str = "SANITY_DATASET";
pub const ENV_API_VERSION: &str = "SANITY_API_VERSION";
pub const ENV_API_URL: &str = "SANITY_API_URL";
pub const ENV_TIMEOUT: &str = "SANITY_TIMEOUT_SECS";

pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2021-06-07";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the content store
#[derive(Clone)]
pub struct Config {
    /// 项目 ID
    pub project_id: String,
    /// 数据集名称，默认 production
    pub dataset: String,
    /// 写入权限 token
    pub token: String,
    /// API 版本日期 (YYYY-MM-DD)
    pub api_version: String,
    /// Base URL override; defaults to the project's API host
    pub api_url: Option<String>,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Config {
    /// Create a configuration with defaults for everything but the credentials
    pub fn new(project_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: DEFAULT_DATASET.to_string(),
            token: token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            api_url: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let project_id = get(ENV_PROJECT_ID).ok_or(ConfigError::Missing(ENV_PROJECT_ID))?;
        let token = get(ENV_TOKEN).ok_or(ConfigError::Missing(ENV_TOKEN))?;

        let timeout = match get(ENV_TIMEOUT) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: ENV_TIMEOUT,
                value: raw.clone(),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let mut config = Self::new(project_id, token).with_timeout(timeout);
        if let Some(dataset) = get(ENV_DATASET) {
            config = config.with_dataset(dataset);
        }
        if let Some(version) = get(ENV_API_VERSION) {
            config = config.with_api_version(version);
        }
        if let Some(url) = get(ENV_API_URL) {
            config = config.with_api_url(url);
        }

        Ok(config)
    }

    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = dataset.into();
        self
    }

    /// Set the API version; a leading `v` is accepted and dropped
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.api_version = version.trim_start_matches('v').to_string();
        self
    }

    /// Point the client at a different host (proxies, tests)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> String {
        match &self.api_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.sanity.io", self.project_id),
        }
    }

    /// Mutation endpoint for the configured dataset
    pub fn mutate_url(&self) -> String {
        format!(
            "{}/v{}/data/mutate/{}",
            self.base_url(),
            self.api_version,
            self.dataset
        )
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::SanityClient> {
        crate::SanityClient::new(self)
    }
}

// The token never reaches log output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("project_id", &self.project_id)
            .field("dataset", &self.dataset)
            .field("token", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
