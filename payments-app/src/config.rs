//! Configuration loading from environment.

use std::env;

use payments_repo::{Backend, DEFAULT_REGION, DEFAULT_TABLE_NAME, RepoConfig};

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub repo: RepoConfig,
    /// OTLP collector; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a port number: {}", e))?;

        let backend: Backend = match var("PAYMENTS_BACKEND") {
            Some(raw) => raw.parse()?,
            None => Backend::DynamoDb,
        };

        let repo = RepoConfig {
            backend,
            table_name: var("PAYMENTS_TABLE").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            region: var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: var("AWS_ENDPOINT_URL"),
        };

        Ok(Self {
            port,
            repo,
            otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }
}
