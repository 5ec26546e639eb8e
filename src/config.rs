//! Client configuration
//!
//! Base URLs, user agents and the request timeout for both API families.
//! Every field has a default, so an empty YAML document is a valid config.

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Client Config
// ============================================================================

/// Settings shared by the monitoring and portal clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the API-key monitoring API
    pub monitoring_base_url: String,

    /// Base URL of the cookie-authenticated portal API
    pub portal_base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// `User-Agent` sent to the monitoring API
    pub monitoring_user_agent: String,

    /// `User-Agent` sent to the portal API
    pub portal_user_agent: String,

    /// `CLIENT-VERSION` header sent to the portal API
    pub portal_client_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            monitoring_base_url: default_monitoring_base_url(),
            portal_base_url: default_portal_base_url(),
            timeout_secs: default_timeout(),
            monitoring_user_agent: default_monitoring_user_agent(),
            portal_user_agent: default_portal_user_agent(),
            portal_client_version: default_portal_client_version(),
        }
    }
}

fn default_monitoring_base_url() -> String {
    "https://monitoringapi.solaredge.com".to_string()
}

fn default_portal_base_url() -> String {
    "https://api.solaredge.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_monitoring_user_agent() -> String {
    "SolarEdge Monitoring API for Rust".to_string()
}

fn default_portal_user_agent() -> String {
    "SolarEdge/5 CFNetwork/1410.0.3 Darwin/22.6.0".to_string()
}

fn default_portal_client_version() -> String {
    "3.12".to_string()
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Transport settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder().timeout(self.timeout()).build()
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("monitoring_base_url", &self.monitoring_base_url),
            ("portal_base_url", &self.portal_base_url),
        ] {
            url::Url::parse(value)
                .map_err(|e| Error::config(format!("{name} is not a valid URL: {e}")))?;
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn monitoring_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.monitoring_base_url = url.into();
        self
    }

    pub fn portal_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.portal_base_url = url.into();
        self
    }

    /// Point both families at the same host, as mock servers do
    pub fn base_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.monitoring_base_url(url.clone()).portal_base_url(url)
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn monitoring_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.monitoring_user_agent = agent.into();
        self
    }

    pub fn portal_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.portal_user_agent = agent.into();
        self
    }

    pub fn portal_client_version(mut self, version: impl Into<String>) -> Self {
        self.config.portal_client_version = version.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
