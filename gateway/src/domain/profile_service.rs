//! Profile retrieval and contact-detail updates.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ports::ProfileGateway;
use crate::domain::token::TokenCipher;
use crate::domain::validation::{contains_forbidden_chars, validate_password};
use crate::domain::{Error, Profile, SessionId, map_upstream_error, session_from_token};

/// Validates bearer tokens and payload fields, then delegates profile
/// operations to the upstream gateway.
pub struct ProfileService {
    gateway: Arc<dyn ProfileGateway>,
    cipher: TokenCipher,
}

impl ProfileService {
    /// Create a service over the given gateway and token codec.
    pub fn new(gateway: Arc<dyn ProfileGateway>, cipher: TokenCipher) -> Self {
        Self { gateway, cipher }
    }

    /// Fetch the subscriber profile behind the bearer token.
    pub async fn profile(&self, token: &str) -> Result<Profile, Error> {
        let session = self.session(token)?;
        let profile = self
            .gateway
            .fetch_profile(&session)
            .await
            .map_err(map_upstream_error)?;
        debug!(account = %profile.id, "profile fetched");
        Ok(profile)
    }

    /// Replace the account password.
    ///
    /// Policy violations (length floor, forbidden characters) are rejected
    /// before the token is even inspected, so no upstream call is made.
    pub async fn change_password(&self, token: &str, new_password: &str) -> Result<(), Error> {
        if validate_password(new_password).is_err() {
            return Err(Error::invalid_credentials());
        }
        let session = self.session(token)?;
        self.gateway
            .change_password(&session, new_password)
            .await
            .map_err(map_upstream_error)
    }

    /// Replace the contact e-mail.
    pub async fn change_email(&self, token: &str, new_email: &str) -> Result<(), Error> {
        if new_email.is_empty() {
            return Err(Error::bad_param());
        }
        if contains_forbidden_chars(new_email) {
            return Err(Error::invalid_credentials());
        }
        let session = self.session(token)?;
        self.gateway
            .change_email(&session, new_email)
            .await
            .map_err(map_upstream_error)
    }

    /// Replace the contact phone number.
    pub async fn change_phone(&self, token: &str, new_phone: &str) -> Result<(), Error> {
        if new_phone.is_empty() {
            return Err(Error::bad_param());
        }
        if contains_forbidden_chars(new_phone) {
            return Err(Error::invalid_credentials());
        }
        let session = self.session(token)?;
        self.gateway
            .change_phone(&session, new_phone)
            .await
            .map_err(map_upstream_error)
    }

    fn session(&self, token: &str) -> Result<SessionId, Error> {
        session_from_token(&self.cipher, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockProfileGateway, UpstreamError};
    use crate::domain::PASSWORD_PLACEHOLDER;
    use rstest::rstest;

    fn cipher() -> TokenCipher {
        TokenCipher::new("Sp3ktr").expect("valid key")
    }

    fn service(gateway: MockProfileGateway) -> ProfileService {
        ProfileService::new(Arc::new(gateway), cipher())
    }

    fn token_for(session_id: &str) -> String {
        cipher().encode(session_id).expect("encodable id")
    }

    fn fixture_profile() -> Profile {
        Profile {
            id: "10001466".into(),
            first_name: "Ivan".into(),
            middle_name: "Ivanovich".into(),
            last_name: "Ivanov".into(),
            full_name: "Ivanov Ivanovich Ivan".into(),
            balance: 390.67,
            to_pay: 0.0,
            tariff: "Home 100".into(),
            email: "ivanov@example.com".into(),
            phone: "+79990000000".into(),
            password: PASSWORD_PLACEHOLDER.into(),
            internet_status: true,
            next_pay_date: "2025-02-01".into(),
        }
    }

    #[actix_web::test]
    async fn profile_decodes_the_token_before_calling_upstream() {
        let mut gateway = MockProfileGateway::new();
        gateway
            .expect_fetch_profile()
            .withf(|session: &SessionId| session.as_str() == "sess42")
            .times(1)
            .return_once(|_| Ok(fixture_profile()));

        let profile = service(gateway)
            .profile(&token_for("sess42"))
            .await
            .expect("profile");
        assert_eq!(profile.id, "10001466");
    }

    #[rstest]
    #[case::short("short1")]
    #[case::forbidden("password;drop")]
    #[actix_web::test]
    async fn password_change_rejects_policy_violations_without_upstream_call(
        #[case] new_password: &str,
    ) {
        let mut gateway = MockProfileGateway::new();
        gateway.expect_change_password().times(0);

        let err = service(gateway)
            .change_password(&token_for("sess42"), new_password)
            .await
            .expect_err("policy violation");
        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    }

    #[actix_web::test]
    async fn email_change_rejects_empty_and_forbidden_addresses() {
        let mut gateway = MockProfileGateway::new();
        gateway.expect_change_email().times(0);
        let svc = service(gateway);
        let token = token_for("sess42");

        let empty = svc.change_email(&token, "").await.expect_err("empty");
        assert_eq!(empty.code(), ErrorCode::BadParamInput);

        let forbidden = svc
            .change_email(&token, "user<x@example.com")
            .await
            .expect_err("forbidden");
        assert_eq!(forbidden.code(), ErrorCode::InvalidCredentials);
    }

    #[actix_web::test]
    async fn expired_sessions_surface_as_session_expired() {
        let mut gateway = MockProfileGateway::new();
        gateway.expect_change_email().times(1).return_once(|_, _| {
            Err(UpstreamError::rejected(
                ErrorCode::SessionExpired,
                "Необходимо авторизоваться",
            ))
        });

        let err = service(gateway)
            .change_email(&token_for("sess42"), "new@example.com")
            .await
            .expect_err("expired");
        assert_eq!(err, Error::session_expired());
    }

    #[actix_web::test]
    async fn malformed_tokens_are_rejected_locally() {
        let mut gateway = MockProfileGateway::new();
        gateway.expect_fetch_profile().times(0);

        let err = service(gateway)
            .profile("not-alphanumeric!")
            .await
            .expect_err("bad token");
        assert_eq!(err.code(), ErrorCode::InvalidToken);
    }
}
