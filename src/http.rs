//! Native HTTP identity client backed by `reqwest`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::envelope::AuthResponse;
use crate::identity::{IdentityClient, IdentityError};

/// Posts credentials to `{base_url}{login_path}` as JSON.
#[derive(Debug, Clone)]
pub struct HttpIdentityClient {
    http: reqwest::Client,
    login_url: String,
}

impl HttpIdentityClient {
    /// # Errors
    ///
    /// Returns [`IdentityError::Request`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| IdentityError::Request(e.to_string()))?;
        Ok(Self { http, login_url: config.login_url() })
    }

    #[cfg(test)]
    fn login_url(&self) -> &str {
        &self.login_url
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityClient for HttpIdentityClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, IdentityError> {
        tracing::debug!(url = %self.login_url, email = %credentials.email, "posting login request");
        let response = self
            .http
            .post(&self.login_url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        parse_response(status, &text)
    }
}

/// Map an HTTP status and body to an envelope.
///
/// Any non-2xx status counts as a transport failure, even when the body holds
/// an envelope.
fn parse_response(status: u16, body: &str) -> Result<AuthResponse, IdentityError> {
    if !(200..300).contains(&status) {
        return Err(IdentityError::Status { status });
    }
    serde_json::from_str(body).map_err(|e| IdentityError::Decode(e.to_string()))
}
