//! Driven port for subscriber notifications.

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::{Notification, SessionId};

/// Port for fetching upstream notifications. Ordering and duplication are
/// whatever upstream returns.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Fetch all notifications for one session.
    async fn notifications(&self, session: &SessionId) -> Result<Vec<Notification>, UpstreamError>;
}
