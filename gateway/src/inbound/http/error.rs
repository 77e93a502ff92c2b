//! HTTP mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while giving every failure the
//! same wire shape: a status from the fixed taxonomy table and a
//! `{"message"}` JSON body. Raw upstream text never appears here; services
//! have already collapsed it into the taxonomy.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "invalid credentials")]
    pub message: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::BadParamInput => StatusCode::BAD_REQUEST,
        ErrorCode::InvalidCredentials
        | ErrorCode::SessionExpired
        | ErrorCode::Unauthorized
        | ErrorCode::InvalidToken => StatusCode::UNAUTHORIZED,
        ErrorCode::AccountLocked | ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
        // Everything outside the documented table reports as an internal
        // failure; NotFound/Conflict/InsufficientFunds have no upstream
        // producer today.
        ErrorCode::NotFound
        | ErrorCode::Conflict
        | ErrorCode::InsufficientFunds
        | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.message().to_owned(),
        })
    }
}

/// Collapse JSON extractor failures into the documented 400 payload instead
/// of actix's default plain-text body.
pub fn json_error_handler(
    error: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    tracing::debug!(error = %error, "rejecting malformed request payload");
    Error::new(ErrorCode::BadParamInput, "Invalid request payload").into()
}
