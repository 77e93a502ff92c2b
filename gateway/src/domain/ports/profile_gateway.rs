//! Driven port for profile reads and contact-detail updates.

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::{Profile, SessionId};

/// Port for upstream profile operations. Every read re-fetches from
/// upstream; the gateway caches nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// Fetch the subscriber profile for one session.
    async fn fetch_profile(&self, session: &SessionId) -> Result<Profile, UpstreamError>;

    /// Replace the account password.
    async fn change_password(
        &self,
        session: &SessionId,
        password: &str,
    ) -> Result<(), UpstreamError>;

    /// Replace the contact e-mail.
    async fn change_email(&self, session: &SessionId, email: &str) -> Result<(), UpstreamError>;

    /// Replace the contact phone number.
    async fn change_phone(&self, session: &SessionId, phone: &str) -> Result<(), UpstreamError>;
}
