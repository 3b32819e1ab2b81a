//! REST API helpers for communicating with the identity service.
//!
//! Browser builds (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an `IdentityError`; the login controller turns it into a
//! generic message, so nothing here needs to be user-presentable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use storefront::{AuthResponse, Credentials, IdentityClient, IdentityError};

/// Same-origin login endpoint.
pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";

#[cfg(any(test, not(feature = "csr")))]
const NOT_IN_BROWSER: &str = "not available outside the browser";

#[cfg(any(test, feature = "csr"))]
fn login_status_error(status: u16) -> IdentityError {
    IdentityError::Status { status }
}

/// [`IdentityClient`] posting JSON credentials with `gloo-net`.
#[derive(Clone, Debug)]
pub struct GlooIdentityClient {
    endpoint: String,
}

impl Default for GlooIdentityClient {
    fn default() -> Self {
        Self::new(LOGIN_ENDPOINT)
    }
}

impl GlooIdentityClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityClient for GlooIdentityClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, IdentityError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(credentials)
                .map_err(|e| IdentityError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| IdentityError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(login_status_error(resp.status()));
            }
            resp.json::<AuthResponse>()
                .await
                .map_err(|e| IdentityError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(IdentityError::Request(NOT_IN_BROWSER.to_owned()))
        }
    }
}
