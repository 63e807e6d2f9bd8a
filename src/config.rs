//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Base URL of the backend that handles `/pay` and deletions, without a
    /// trailing slash. `None` disables forwarding.
    pub upstream_url: Option<String>,
    pub proxy_timeout_secs: u64,
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `UPSTREAM_URL`: `http(s)://` base URL of the payment backend
    /// - `PAY_PROXY_TIMEOUT_SECS`: default 30, must be non-zero
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let upstream_url = lookup("UPSTREAM_URL")
            .map(|raw| parse_upstream_url(&raw))
            .transpose()?
            .flatten();

        let proxy_timeout_secs = match lookup("PAY_PROXY_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid { var: "PAY_PROXY_TIMEOUT_SECS", value: raw })?,
            None => DEFAULT_PROXY_TIMEOUT_SECS,
        };

        Ok(Self { port, upstream_url, proxy_timeout_secs })
    }
}

/// Blank means unset; anything else must be an absolute http(s) URL.
fn parse_upstream_url(raw: &str) -> Result<Option<String>, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Ok(None);
    }
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ConfigError::Invalid { var: "UPSTREAM_URL", value: raw.to_owned() });
    }
    Ok(Some(trimmed.to_owned()))
}
