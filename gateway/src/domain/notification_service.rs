//! Subscriber notification listing.

use std::sync::Arc;

use crate::domain::ports::NotificationGateway;
use crate::domain::token::TokenCipher;
use crate::domain::{Error, Notification, map_upstream_error, session_from_token};

/// Validates the bearer token and fetches notifications from upstream.
pub struct NotificationService {
    gateway: Arc<dyn NotificationGateway>,
    cipher: TokenCipher,
}

impl NotificationService {
    /// Create a service over the given gateway and token codec.
    pub fn new(gateway: Arc<dyn NotificationGateway>, cipher: TokenCipher) -> Self {
        Self { gateway, cipher }
    }

    /// List notifications for the session behind the bearer token.
    pub async fn notifications(&self, token: &str) -> Result<Vec<Notification>, Error> {
        let session = session_from_token(&self.cipher, token)?;
        self.gateway
            .notifications(&session)
            .await
            .map_err(map_upstream_error)
    }
}
