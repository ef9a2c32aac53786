//! Relay configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Secrets are read once at startup and injected into `AppState`. A missing
//! secret does not stop the process: the relay still serves preflights and
//! answers every POST with a configuration error, so a half-deployed relay
//! tells the caller what to fix.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8787;
pub const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors that prevent the relay from starting at all.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// The outbound HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Bearer token and target database, both present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotionCredentials {
    pub token: String,
    pub database_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub port: u16,
    pub notion_api_url: String,
    pub connect_timeout: Duration,
    /// `None` when either `NOTION_TOKEN` or `NOTION_DB_ID` is unset or blank.
    pub credentials: Option<NotionCredentials>,
}

impl RelayConfig {
    /// Build typed relay config from the process environment.
    ///
    /// Optional:
    /// - `NOTION_TOKEN`, `NOTION_DB_ID`: requests fail with 500 until both are set
    /// - `PORT`: default 8787
    /// - `NOTION_API_URL`: default `https://api.notion.com`
    /// - `NOTION_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let notion_api_url = lookup("NOTION_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NOTION_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let connect_secs = lookup("NOTION_CONNECT_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS);

        let token = non_blank(lookup("NOTION_TOKEN"));
        let database_id = non_blank(lookup("NOTION_DB_ID"));
        let credentials = match (token, database_id) {
            (Some(token), Some(database_id)) => Some(NotionCredentials { token, database_id }),
            _ => None,
        };

        Ok(Self { port, notion_api_url, connect_timeout: Duration::from_secs(connect_secs), credentials })
    }

    /// Full URL of the pages-creation endpoint.
    #[must_use]
    pub fn pages_url(&self) -> String {
        format!("{}/v1/pages", self.notion_api_url)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
