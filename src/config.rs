//! Identity service configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_LOGIN_PATH: &str = "/api/v1/auth/login";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("login path must start with `/`: {0}")]
    InvalidLoginPath(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub login_path: String,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            timeouts: Timeouts::default(),
        }
    }
}

impl ClientConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `STOREFRONT_BASE_URL`: default `http://127.0.0.1:8080`
    /// - `STOREFRONT_LOGIN_PATH`: default `/api/v1/auth/login`
    /// - `STOREFRONT_REQUEST_TIMEOUT_SECS`: default 30
    /// - `STOREFRONT_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the base URL has no http(s) scheme or
    /// the login path is not absolute.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let login_path = std::env::var("STOREFRONT_LOGIN_PATH").unwrap_or_else(|_| DEFAULT_LOGIN_PATH.to_owned());
        let timeouts = Timeouts {
            request_secs: env_parse_u64("STOREFRONT_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("STOREFRONT_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Self::new(&base_url, &login_path, timeouts)
    }

    /// Validate and normalize the parts of a config.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`].
    pub fn new(base_url: &str, login_path: &str, timeouts: Timeouts) -> Result<Self, ConfigError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_owned()));
        }
        let login_path = login_path.trim();
        if !login_path.starts_with('/') {
            return Err(ConfigError::InvalidLoginPath(login_path.to_owned()));
        }
        Ok(Self { base_url: base_url.to_owned(), login_path: login_path.to_owned(), timeouts })
    }

    /// Absolute URL of the login endpoint.
    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url, self.login_path)
    }

    /// Absolute URL of a front-end route on the same host.
    #[must_use]
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
