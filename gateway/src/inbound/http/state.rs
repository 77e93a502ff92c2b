//! Shared HTTP adapter state.
//!
//! Handlers accept this bundle via `actix_web::web::Data`, so they depend
//! only on the feature services and stay testable with mocked gateways.

use std::sync::Arc;

use crate::domain::{AuthService, NotificationService, ProfileService, RepairService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Sign-in and password-reset operations.
    pub auth: Arc<AuthService>,
    /// Profile reads and contact-detail updates.
    pub profile: Arc<ProfileService>,
    /// Notification listing.
    pub notifications: Arc<NotificationService>,
    /// Repair-ticket creation.
    pub repairs: Arc<RepairService>,
}

impl HttpState {
    /// Bundle the feature services for handler injection.
    pub fn new(
        auth: AuthService,
        profile: ProfileService,
        notifications: NotificationService,
        repairs: RepairService,
    ) -> Self {
        Self {
            auth: Arc::new(auth),
            profile: Arc::new(profile),
            notifications: Arc::new(notifications),
            repairs: Arc::new(repairs),
        }
    }
}
