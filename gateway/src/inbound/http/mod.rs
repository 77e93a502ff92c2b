//! HTTP inbound adapter exposing the REST surface.

pub mod auth;
pub mod bearer;
pub mod error;
pub mod notifications;
pub mod profile;
pub mod repairs;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;

use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use error::{ApiResult, ErrorBody};

/// Acknowledgement body used by mutation endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Wrap a confirmation message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Register the REST surface under `/api/v1`.
///
/// Shared between the server bootstrap and in-process test apps so both run
/// the exact same wiring, including the malformed-payload handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
            .service(auth::sign_in)
            .service(auth::reset_password)
            .service(auth::submit_password)
            .service(profile::profile)
            .service(profile::change_password)
            .service(profile::change_email)
            .service(profile::change_phone)
            .service(notifications::notifications)
            .service(repairs::create_repair),
    );
}
