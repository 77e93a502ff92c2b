//! Transport-agnostic domain layer: records, error taxonomy, validation,
//! ports, and the per-feature services.

mod account;
mod auth_service;
mod error;
mod notification_service;
mod profile_service;
mod repair_service;
pub mod ports;
pub mod token;
pub mod validation;

pub use account::{Credentials, Notification, PASSWORD_PLACEHOLDER, Profile, RepairRequest, SessionId};
pub use auth_service::AuthService;
pub use error::{Error, ErrorCode};
pub use notification_service::NotificationService;
pub use profile_service::ProfileService;
pub use repair_service::RepairService;

use tracing::{error, warn};

use ports::UpstreamError;
use token::TokenCipher;
use validation::contains_forbidden_chars;

/// Collapse an adapter failure into the domain taxonomy.
///
/// Classified rejections pass through unchanged. Unrecognized upstream error
/// strings are logged verbatim so they can be triaged and added to the
/// classification table; the caller still sees a plain internal error.
pub(crate) fn map_upstream_error(error: UpstreamError) -> Error {
    match error {
        UpstreamError::Rejected { code, .. } => Error::from_code(code),
        UpstreamError::Unrecognized { message } => {
            warn!(upstream_error = %message, "unmapped upstream error string");
            Error::internal()
        }
        other => {
            error!(error = %other, "upstream call failed");
            Error::internal()
        }
    }
}

/// Validate a bearer token and recover the upstream session id.
///
/// Rejected before any network call: empty tokens, tokens carrying forbidden
/// characters, and tokens the cipher cannot decode.
pub(crate) fn session_from_token(
    cipher: &TokenCipher,
    token: &str,
) -> Result<SessionId, Error> {
    if token.is_empty() || contains_forbidden_chars(token) {
        return Err(Error::invalid_token());
    }
    cipher
        .decode(token)
        .map(SessionId::new)
        .map_err(|_| Error::invalid_token())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cipher() -> TokenCipher {
        TokenCipher::new("Sp3ktr").expect("valid key")
    }

    #[test]
    fn rejections_pass_their_code_through() {
        let err = map_upstream_error(UpstreamError::rejected(
            ErrorCode::SessionExpired,
            "Необходимо авторизоваться",
        ));
        assert_eq!(err, Error::session_expired());
    }

    #[test]
    fn unrecognized_and_transport_failures_become_internal() {
        for upstream in [
            UpstreamError::unrecognized("Новая ошибка"),
            UpstreamError::transport("connection refused"),
            UpstreamError::timeout("deadline exceeded"),
            UpstreamError::status(502),
            UpstreamError::decode("bad json"),
        ] {
            assert_eq!(map_upstream_error(upstream).code(), ErrorCode::InternalError);
        }
    }

    #[test]
    fn session_recovery_round_trips_an_encoded_id() {
        let cipher = cipher();
        let token = cipher.encode("abc123").expect("encode");
        let session = session_from_token(&cipher, &token).expect("valid token");
        assert_eq!(session.as_str(), "abc123");
    }

    #[test]
    fn empty_forbidden_and_undecodable_tokens_are_invalid() {
        let cipher = cipher();
        for token in ["", "to<ken", "token-with-dash"] {
            let err = session_from_token(&cipher, token).expect_err("rejected");
            assert_eq!(err.code(), ErrorCode::InvalidToken);
        }
    }
}
