//! Sign-in and password-reset service.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::ports::AuthGateway;
use crate::domain::token::TokenCipher;
use crate::domain::validation::{contains_forbidden_chars, validate_password};
use crate::domain::{Credentials, Error, map_upstream_error};

/// Validates credentials, delegates to the upstream gateway, and obfuscates
/// the returned session id into the client-facing token.
pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
    cipher: TokenCipher,
}

impl AuthService {
    /// Create a service over the given gateway and token codec.
    pub fn new(gateway: Arc<dyn AuthGateway>, cipher: TokenCipher) -> Self {
        Self { gateway, cipher }
    }

    /// Exchange credentials for a bearer token.
    ///
    /// Credentials with empty or forbidden-character fields are rejected
    /// before any upstream call.
    pub async fn sign_in(&self, credentials: Credentials) -> Result<String, Error> {
        if !acceptable_field(&credentials.login) || !acceptable_field(&credentials.password) {
            return Err(Error::invalid_credentials());
        }

        let session_id = self
            .gateway
            .login(&credentials)
            .await
            .map_err(map_upstream_error)?;
        debug!(login = %credentials.login, "sign-in accepted upstream");

        self.cipher.encode(&session_id).map_err(|codec_error| {
            error!(error = %codec_error, "upstream session id outside token alphabet");
            Error::internal()
        })
    }

    /// Ask upstream to start a password reset for the account.
    pub async fn request_password_reset(&self, login: &str) -> Result<(), Error> {
        if !acceptable_field(login) {
            return Err(Error::invalid_credentials());
        }
        self.gateway
            .request_password_reset(login)
            .await
            .map_err(map_upstream_error)
    }

    /// Complete a password reset with the emailed reset token.
    pub async fn submit_password_reset(
        &self,
        reset_token: &str,
        password: &str,
    ) -> Result<(), Error> {
        if validate_password(password).is_err() {
            return Err(Error::invalid_credentials());
        }
        if !acceptable_field(reset_token) {
            return Err(Error::invalid_credentials());
        }
        self.gateway
            .submit_password_reset(reset_token, password)
            .await
            .map_err(map_upstream_error)
    }
}

fn acceptable_field(value: &str) -> bool {
    !value.is_empty() && !contains_forbidden_chars(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockAuthGateway, UpstreamError};
    use rstest::rstest;

    fn cipher() -> TokenCipher {
        TokenCipher::new("Sp3ktr").expect("valid key")
    }

    fn service(gateway: MockAuthGateway) -> AuthService {
        AuthService::new(Arc::new(gateway), cipher())
    }

    fn credentials(login: &str, password: &str) -> Credentials {
        Credentials {
            login: login.into(),
            password: password.into(),
        }
    }

    #[rstest]
    #[case::injection_login("<injection/>", "correct-horse")]
    #[case::forbidden_password("subscriber", "pass;word!")]
    #[case::empty_login("", "correct-horse")]
    #[case::empty_password("subscriber", "")]
    #[actix_web::test]
    async fn sign_in_rejects_bad_fields_without_calling_upstream(
        #[case] login: &str,
        #[case] password: &str,
    ) {
        let mut gateway = MockAuthGateway::new();
        gateway.expect_login().times(0);

        let err = service(gateway)
            .sign_in(credentials(login, password))
            .await
            .expect_err("rejected locally");
        assert_eq!(err, Error::invalid_credentials());
    }

    #[actix_web::test]
    async fn sign_in_returns_a_decodable_token() {
        let mut gateway = MockAuthGateway::new();
        gateway
            .expect_login()
            .times(1)
            .return_once(|_| Ok("sess42".into()));

        let token = service(gateway)
            .sign_in(credentials("subscriber", "correct-horse"))
            .await
            .expect("token issued");
        assert_ne!(token, "sess42");
        assert_eq!(cipher().decode(&token).expect("decodable"), "sess42");
    }

    #[actix_web::test]
    async fn sign_in_passes_classified_rejections_through() {
        let mut gateway = MockAuthGateway::new();
        gateway.expect_login().times(1).return_once(|_| {
            Err(UpstreamError::rejected(
                ErrorCode::AccountLocked,
                "account locked upstream",
            ))
        });

        let err = service(gateway)
            .sign_in(credentials("subscriber", "correct-horse"))
            .await
            .expect_err("locked");
        assert_eq!(err.code(), ErrorCode::AccountLocked);
    }

    #[actix_web::test]
    async fn reset_submission_enforces_the_password_floor() {
        let mut gateway = MockAuthGateway::new();
        gateway.expect_submit_password_reset().times(0);

        let err = service(gateway)
            .submit_password_reset("resettoken", "short")
            .await
            .expect_err("too short");
        assert_eq!(err.code(), ErrorCode::InvalidCredentials);
    }

    #[actix_web::test]
    async fn reset_request_maps_transport_failures_to_internal() {
        let mut gateway = MockAuthGateway::new();
        gateway
            .expect_request_password_reset()
            .times(1)
            .return_once(|_| Err(UpstreamError::transport("connection refused")));

        let err = service(gateway)
            .request_password_reset("subscriber")
            .await
            .expect_err("transport failure");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
