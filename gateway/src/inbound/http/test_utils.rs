//! Fixtures shared by the HTTP handler tests.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{
    MockAuthGateway, MockNotificationGateway, MockProfileGateway, MockRepairGateway,
};
use crate::domain::token::TokenCipher;
use crate::domain::{AuthService, NotificationService, ProfileService, RepairService};
use crate::inbound::http::state::HttpState;

const TEST_KEY: &str = "Sp3ktr";

pub(crate) fn cipher() -> TokenCipher {
    TokenCipher::new(TEST_KEY).expect("valid key")
}

pub(crate) fn token_for(session_id: &str) -> String {
    cipher().encode(session_id).expect("encodable id")
}

/// Mock gateway bundle; tests set expectations only on the mocks they
/// exercise, the rest stay untouched.
#[derive(Default)]
pub(crate) struct MockGateways {
    pub(crate) auth: MockAuthGateway,
    pub(crate) profile: MockProfileGateway,
    pub(crate) notifications: MockNotificationGateway,
    pub(crate) repairs: MockRepairGateway,
}

pub(crate) fn state_from(mocks: MockGateways) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        AuthService::new(Arc::new(mocks.auth), cipher()),
        ProfileService::new(Arc::new(mocks.profile), cipher()),
        NotificationService::new(Arc::new(mocks.notifications), cipher()),
        RepairService::new(Arc::new(mocks.repairs), cipher()),
    ))
}

pub(crate) fn test_app(
    state: web::Data<HttpState>,
) -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    actix_web::App::new()
        .app_data(state)
        .configure(super::configure)
}
