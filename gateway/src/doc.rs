//! OpenAPI documentation configuration.
//!
//! Registers every REST path and schema plus the bearer security scheme.
//! The generated document backs Swagger UI in debug builds.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Notification, Profile};
use crate::inbound::http::auth::{
    ResetPasswordRequest, SignInRequest, SubmitPasswordRequest, TokenResponse,
};
use crate::inbound::http::profile::{
    ChangeEmailRequest, ChangePasswordRequest, ChangePhoneRequest,
};
use crate::inbound::http::repairs::RepairTicketRequest;
use crate::inbound::http::{ErrorBody, MessageResponse};

/// Enrich the generated document with the bearer security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);
        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Spektr account gateway",
        description = "REST facade over the legacy Spektr account-management API."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::auth::sign_in,
        crate::inbound::http::auth::reset_password,
        crate::inbound::http::auth::submit_password,
        crate::inbound::http::profile::profile,
        crate::inbound::http::profile::change_password,
        crate::inbound::http::profile::change_email,
        crate::inbound::http::profile::change_phone,
        crate::inbound::http::notifications::notifications,
        crate::inbound::http::repairs::create_repair,
    ),
    components(schemas(
        SignInRequest,
        TokenResponse,
        ResetPasswordRequest,
        SubmitPasswordRequest,
        ChangePasswordRequest,
        ChangeEmailRequest,
        ChangePhoneRequest,
        RepairTicketRequest,
        Profile,
        Notification,
        MessageResponse,
        ErrorBody,
    )),
    tags(
        (name = "auth", description = "Sign-in and password recovery"),
        (name = "profile", description = "Subscriber profile"),
        (name = "notifications", description = "Subscriber notifications"),
        (name = "repairs", description = "Repair tickets")
    )
)]
pub struct ApiDoc;
