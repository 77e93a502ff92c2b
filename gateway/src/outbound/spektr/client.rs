//! Reqwest-backed adapter for the Spektr account-management API.
//!
//! This adapter owns transport details only: the GET-with-query-parameters
//! protocol, timeout and HTTP error mapping, JSON decoding into domain
//! records, and the classification of upstream error strings.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::dto::{AckDto, LoginReplyDto, NotificationsReplyDto, ProfileReplyDto};
use crate::domain::ports::{
    AuthGateway, NotificationGateway, ProfileGateway, RepairGateway, UpstreamError,
};
use crate::domain::{Credentials, ErrorCode, Notification, Profile, RepairRequest, SessionId};

/// Fixed query parameters of the legacy RPC-over-query-string protocol.
const UPSTREAM_FORMAT: &str = "json";
const UPSTREAM_CONTEXT: &str = "web";
const UPSTREAM_MODEL: &str = "users";

/// Logical operation names understood by the upstream `users` model.
mod methods {
    pub(super) const LOGIN: &str = "web_cabinet.login";
    pub(super) const RESET_PASSWORD: &str = "web_cabinet.reset_password";
    pub(super) const SUBMIT_PASSWORD: &str = "web_cabinet.submit_password";
    pub(super) const GET_PROFILE: &str = "web_cabinet.get_profile";
    pub(super) const CHANGE_PASSWORD: &str = "web_cabinet.change_password";
    pub(super) const CHANGE_EMAIL: &str = "web_cabinet.change_email";
    pub(super) const CHANGE_PHONE: &str = "web_cabinet.change_phone";
    pub(super) const GET_NOTIFICATIONS: &str = "web_cabinet.get_notifications_for_user";
    pub(super) const CREATE_TICKET: &str = "web_cabinet.create_ticket";
}

/// Upstream error strings with a known domain meaning.
///
/// The authentication-required marker is checked before any other
/// interpretation of a reply. New upstream strings surface as
/// [`UpstreamError::Unrecognized`] until an entry is added here.
const REJECTION_TABLE: &[(&str, ErrorCode)] = &[
    ("Необходимо авторизоваться", ErrorCode::SessionExpired),
];

/// Spektr adapter performing one GET per logical operation.
pub struct SpektrClient {
    client: Client,
    base_url: Url,
}

impl SpektrClient {
    /// Build an adapter with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Issue one upstream call: serialize `arg` to JSON, send it as `arg1`
    /// alongside the four fixed protocol parameters, and return the raw
    /// body of a 200 reply.
    async fn call<A: Serialize>(&self, method: &str, arg: &A) -> Result<Vec<u8>, UpstreamError> {
        let arg1 = serde_json::to_string(arg).map_err(|error| {
            UpstreamError::decode(format!("argument serialization failed: {error}"))
        })?;
        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[
                ("format", UPSTREAM_FORMAT),
                ("context", UPSTREAM_CONTEXT),
                ("model", UPSTREAM_MODEL),
                ("method1", method),
                ("arg1", arg1.as_str()),
            ])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if status != StatusCode::OK {
            return Err(UpstreamError::status(status.as_u16()));
        }
        Ok(body.to_vec())
    }

    /// Call an ack-style operation and reject on a non-empty error field.
    async fn call_for_ack<A: Serialize>(
        &self,
        method: &str,
        arg: &A,
    ) -> Result<(), UpstreamError> {
        let body = self.call(method, arg).await?;
        let reply: AckDto = decode(&body)?;
        match nonempty(reply.error) {
            Some(text) => Err(classify_rejection(&text)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthGateway for SpektrClient {
    async fn login(&self, credentials: &Credentials) -> Result<String, UpstreamError> {
        let body = self
            .call(
                methods::LOGIN,
                &json!({
                    "login": credentials.login,
                    "passwd": credentials.password,
                }),
            )
            .await?;
        let reply: LoginReplyDto = decode(&body)?;
        if let Some(text) = nonempty(reply.error) {
            return Err(classify_login_rejection(&text));
        }
        nonempty(reply.session_id)
            .ok_or_else(|| UpstreamError::decode("login reply is missing session_id"))
    }

    async fn request_password_reset(&self, login: &str) -> Result<(), UpstreamError> {
        // The upstream handler requires base_url and accepts the literal
        // "null" to suppress its own link rendering.
        let arg = json!({ "login": login, "base_url": "null" });
        match self.call_for_ack(methods::RESET_PASSWORD, &arg).await {
            Err(UpstreamError::Unrecognized { message }) => Err(UpstreamError::rejected(
                ErrorCode::InvalidCredentials,
                message,
            )),
            other => other,
        }
    }

    async fn submit_password_reset(
        &self,
        reset_token: &str,
        password: &str,
    ) -> Result<(), UpstreamError> {
        let arg = json!({
            "token": reset_token,
            "psw1": password,
            "psw2": password,
        });
        match self.call_for_ack(methods::SUBMIT_PASSWORD, &arg).await {
            Err(UpstreamError::Unrecognized { message }) => Err(UpstreamError::rejected(
                ErrorCode::InvalidCredentials,
                message,
            )),
            other => other,
        }
    }
}

#[async_trait]
impl ProfileGateway for SpektrClient {
    async fn fetch_profile(&self, session: &SessionId) -> Result<Profile, UpstreamError> {
        let body = self
            .call(methods::GET_PROFILE, &json!({ "suid": session.as_str() }))
            .await?;
        let reply: ProfileReplyDto = decode(&body)?;
        if let Some(text) = nonempty(reply.error.clone()) {
            return Err(classify_rejection(&text));
        }
        Ok(reply.into_profile())
    }

    async fn change_password(
        &self,
        session: &SessionId,
        password: &str,
    ) -> Result<(), UpstreamError> {
        let arg = json!({
            "suid": session.as_str(),
            "psw1": password,
            "psw2": password,
        });
        self.call_for_ack(methods::CHANGE_PASSWORD, &arg).await
    }

    async fn change_email(&self, session: &SessionId, email: &str) -> Result<(), UpstreamError> {
        let arg = json!({ "suid": session.as_str(), "email": email });
        self.call_for_ack(methods::CHANGE_EMAIL, &arg).await
    }

    async fn change_phone(&self, session: &SessionId, phone: &str) -> Result<(), UpstreamError> {
        let arg = json!({ "suid": session.as_str(), "phone": phone });
        self.call_for_ack(methods::CHANGE_PHONE, &arg).await
    }
}

#[async_trait]
impl NotificationGateway for SpektrClient {
    async fn notifications(&self, session: &SessionId) -> Result<Vec<Notification>, UpstreamError> {
        let body = self
            .call(methods::GET_NOTIFICATIONS, &json!({ "suid": session.as_str() }))
            .await?;
        let reply: NotificationsReplyDto = decode(&body)?;
        if let Some(text) = reply.error_text() {
            return Err(classify_rejection(text));
        }
        Ok(reply.into_notifications())
    }
}

#[async_trait]
impl RepairGateway for SpektrClient {
    async fn create_ticket(
        &self,
        session: &SessionId,
        ticket: &RepairRequest,
    ) -> Result<(), UpstreamError> {
        let arg = json!({
            "suid": session.as_str(),
            "subj": ticket.subject,
            "ticket_text": ticket.text,
            "status": "1",
        });
        self.call_for_ack(methods::CREATE_TICKET, &arg).await
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, UpstreamError> {
    serde_json::from_slice(body).map_err(|error| {
        UpstreamError::decode(format!("invalid upstream JSON payload: {error}"))
    })
}

fn nonempty(field: Option<String>) -> Option<String> {
    field.filter(|text| !text.is_empty())
}

/// Classify an upstream error string through the rejection table.
fn classify_rejection(text: &str) -> UpstreamError {
    for (marker, code) in REJECTION_TABLE {
        if text.contains(marker) {
            return UpstreamError::rejected(*code, text);
        }
    }
    UpstreamError::unrecognized(text)
}

/// Login rejections default to invalid credentials: the upstream login
/// handler reports every credential problem as free text.
fn classify_login_rejection(text: &str) -> UpstreamError {
    match classify_rejection(text) {
        UpstreamError::Unrecognized { message } => {
            UpstreamError::rejected(ErrorCode::InvalidCredentials, message)
        }
        classified => classified,
    }
}

fn map_transport_error(error: reqwest::Error) -> UpstreamError {
    if error.is_timeout() {
        UpstreamError::timeout(error.to_string())
    } else {
        UpstreamError::transport(error.to_string())
    }
}
