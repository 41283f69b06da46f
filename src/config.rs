//! Host configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PROXY_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PROXY_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("LEADS_API_URL must be an http(s) URL, got '{0}'")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend base URL without a trailing slash.
    pub backend_url: String,
    pub timeouts: ProxyTimeouts,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LEADS_API_URL`: default `http://127.0.0.1:8000`
    /// - `PROXY_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PROXY_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let backend_url = parse_backend_url(std::env::var("LEADS_API_URL").ok().as_deref())?;
        let timeouts = ProxyTimeouts {
            request_secs: env_parse_u64("PROXY_REQUEST_TIMEOUT_SECS", DEFAULT_PROXY_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("PROXY_CONNECT_TIMEOUT_SECS", DEFAULT_PROXY_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, backend_url, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.unwrap_or(DEFAULT_BACKEND_URL).trim();
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"))
        .ok_or_else(|| ConfigError::InvalidBackendUrl(value.to_owned()))?;
    if rest.trim_matches('/').is_empty() {
        return Err(ConfigError::InvalidBackendUrl(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
