//! Identity service client seam.

use crate::credentials::Credentials;
use crate::envelope::AuthResponse;

/// Transport-level failure of a login request.
///
/// None of these details are shown to the user; the login flow surfaces a
/// generic message and only logs the error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityError {
    /// The request could not be sent or no response arrived.
    #[error("login request failed: {0}")]
    Request(String),
    /// The service answered with a non-success HTTP status.
    #[error("login request failed: status {status}")]
    Status { status: u16 },
    /// The response body was not a valid envelope.
    #[error("login response parse failed: {0}")]
    Decode(String),
    /// The envelope reported success but lacked a required field.
    #[error("login response missing `{0}`")]
    Malformed(&'static str),
}

/// Sends credentials to the identity service.
///
/// Futures are not required to be `Send` so browser HTTP clients qualify.
#[async_trait::async_trait(?Send)]
pub trait IdentityClient {
    /// Post `credentials` and return the decoded envelope.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] when the call itself fails. An envelope
    /// with `success: false` is an `Ok` value.
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, IdentityError>;
}
