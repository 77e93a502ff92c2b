//! Driven port for sign-in and password-reset calls.

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::Credentials;

/// Port for upstream authentication operations.
///
/// `login` returns the raw upstream session id; encoding it into a bearer
/// token is the auth service's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for an upstream session id.
    async fn login(&self, credentials: &Credentials) -> Result<String, UpstreamError>;

    /// Ask upstream to start a password reset for `login`.
    async fn request_password_reset(&self, login: &str) -> Result<(), UpstreamError>;

    /// Complete a password reset with the emailed reset token.
    async fn submit_password_reset(
        &self,
        reset_token: &str,
        password: &str,
    ) -> Result<(), UpstreamError>;
}
