//! Client Config

use std::time::Duration;

use clap::Args;

/// Default catalog API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Default number of cached responses per resource.
pub const DEFAULT_CACHE_CAPACITY: u64 = 256;

/// Default cache lifetime in seconds.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 60;

/// Default settings cache lifetime in seconds.
pub const DEFAULT_SETTINGS_TTL_SECONDS: u64 = 300;

/// Catalog API client settings.
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// Catalog API base URL
    #[arg(long, env = "CATALOG_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "CATALOG_REQUEST_TIMEOUT_SECONDS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECONDS
    )]
    pub request_timeout_seconds: u64,

    /// Maximum cached responses per resource
    #[arg(long, env = "CATALOG_CACHE_CAPACITY", default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_capacity: u64,

    /// Lifetime of cached product, category and stone responses in seconds
    #[arg(long, env = "CATALOG_CACHE_TTL_SECONDS", default_value_t = DEFAULT_CACHE_TTL_SECONDS)]
    pub cache_ttl_seconds: u64,

    /// Lifetime of cached settings in seconds
    #[arg(
        long,
        env = "CATALOG_SETTINGS_TTL_SECONDS",
        default_value_t = DEFAULT_SETTINGS_TTL_SECONDS
    )]
    pub settings_ttl_seconds: u64,
}

impl ClientConfig {
    /// Settings for the given API URL with every other value at its default.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
            settings_ttl_seconds: DEFAULT_SETTINGS_TTL_SECONDS,
        }
    }

    /// Request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Cache lifetime for products, categories and stones.
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Cache lifetime for settings.
    #[must_use]
    pub fn settings_ttl(&self) -> Duration {
        Duration::from_secs(self.settings_ttl_seconds)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        client: ClientConfig,
    }

    #[test]
    fn explicit_arguments_override_defaults() -> TestResult {
        let cli = TestCli::try_parse_from([
            "test",
            "--api-url",
            "https://catalog.example.com/api",
            "--request-timeout-seconds",
            "3",
            "--settings-ttl-seconds",
            "30",
        ])?;

        assert_eq!(cli.client.api_url, "https://catalog.example.com/api");
        assert_eq!(cli.client.request_timeout(), Duration::from_secs(3));
        assert_eq!(cli.client.settings_ttl(), Duration::from_secs(30));

        Ok(())
    }

    #[test]
    fn new_uses_default_lifetimes() {
        let config = ClientConfig::new("http://catalog.test");

        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.settings_ttl(), Duration::from_secs(300));
    }
}
