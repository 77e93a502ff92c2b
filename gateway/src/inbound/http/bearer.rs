//! Bearer-token extraction from the Authorization header.
//!
//! Handlers take [`BearerToken`] as an argument so the missing-header case
//! is answered uniformly before any service code runs.

use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::{Error, ErrorCode};

const BEARER_PREFIX: &str = "Bearer ";

/// Raw bearer token lifted from the Authorization header.
///
/// The `Bearer ` prefix is stripped when present and surrounding whitespace
/// trimmed; a header without the prefix is used as-is. Validation and
/// decoding belong to the services.
#[derive(Debug, Clone)]
pub struct BearerToken(String);

impl BearerToken {
    /// The extracted token text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromRequest for BearerToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<BearerToken, Error> {
    let raw = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if raw.is_empty() {
        return Err(Error::new(
            ErrorCode::Unauthorized,
            "Authorization token is required",
        ));
    }
    let token = raw.strip_prefix(BEARER_PREFIX).unwrap_or(raw).trim();
    Ok(BearerToken(token.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use rstest::rstest;

    #[rstest]
    #[case::bearer_prefix("Bearer abc123", "abc123")]
    #[case::prefix_and_padding("Bearer   abc123  ", "abc123")]
    #[case::no_prefix("abc123", "abc123")]
    fn strips_the_bearer_prefix(#[case] header_value: &str, #[case] expected: &str) {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, header_value))
            .to_http_request();
        let token = extract(&req).expect("token extracted");
        assert_eq!(token.as_str(), expected);
    }

    #[test]
    fn missing_header_is_answered_with_the_canonical_message() {
        let req = TestRequest::default().to_http_request();
        let err = extract(&req).expect_err("missing header");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "Authorization token is required");
    }
}
