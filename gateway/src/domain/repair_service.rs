//! Repair-ticket creation.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::RepairGateway;
use crate::domain::token::TokenCipher;
use crate::domain::validation::contains_forbidden_chars;
use crate::domain::{Error, RepairRequest, map_upstream_error, session_from_token};

/// Validates ticket fields and the bearer token, then files the ticket
/// upstream.
pub struct RepairService {
    gateway: Arc<dyn RepairGateway>,
    cipher: TokenCipher,
}

impl RepairService {
    /// Create a service over the given gateway and token codec.
    pub fn new(gateway: Arc<dyn RepairGateway>, cipher: TokenCipher) -> Self {
        Self { gateway, cipher }
    }

    /// File one repair ticket for the session behind the bearer token.
    ///
    /// Token violations report as unauthorized here rather than invalid
    /// token; clients treat the repair surface as a whole-account action.
    pub async fn create_ticket(&self, token: &str, ticket: RepairRequest) -> Result<(), Error> {
        if ticket.subject.is_empty() || ticket.text.is_empty() {
            return Err(Error::bad_param());
        }
        if contains_forbidden_chars(&ticket.subject) || contains_forbidden_chars(&ticket.text) {
            return Err(Error::invalid_token());
        }
        let session =
            session_from_token(&self.cipher, token).map_err(|_| Error::unauthorized())?;
        self.gateway
            .create_ticket(&session, &ticket)
            .await
            .map_err(map_upstream_error)?;
        debug!(subject = %ticket.subject, "repair ticket filed");
        Ok(())
    }
}
