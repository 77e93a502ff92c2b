//! Driven port for filing repair tickets.

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::{RepairRequest, SessionId};

/// Port for creating upstream repair tickets. Success is boolean; upstream
/// returns no ticket identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepairGateway: Send + Sync {
    /// File one repair ticket for the session's account.
    async fn create_ticket(
        &self,
        session: &SessionId,
        ticket: &RepairRequest,
    ) -> Result<(), UpstreamError>;
}
