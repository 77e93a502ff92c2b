//! Domain-level error taxonomy.
//!
//! Every failure crossing the service boundary is one of these codes. The
//! inbound HTTP adapter maps codes to status lines; upstream error text never
//! reaches a caller.

/// Closed set of failure categories exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Login or password is incorrect.
    InvalidCredentials,
    /// The account is locked upstream.
    AccountLocked,
    /// The session token is no longer valid upstream.
    SessionExpired,
    /// Upstream rate limit was exceeded.
    TooManyRequests,
    /// The caller is not authorized for the operation.
    Unauthorized,
    /// The bearer token is malformed.
    InvalidToken,
    /// The requested item does not exist.
    NotFound,
    /// The item already exists.
    Conflict,
    /// A request parameter failed validation.
    BadParamInput,
    /// The account balance does not cover the operation.
    InsufficientFunds,
    /// The operation is not permitted for this account.
    Forbidden,
    /// Any failure with no more specific category.
    InternalError,
}

impl ErrorCode {
    /// Canonical user-facing message for this code.
    pub fn canonical_message(self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid credentials",
            Self::AccountLocked => "account is locked",
            Self::SessionExpired => "session has expired",
            Self::TooManyRequests => "too many requests, please try again later",
            Self::Unauthorized => "user is not authorized",
            Self::InvalidToken => "invalid token",
            Self::NotFound => "your requested item is not found",
            Self::Conflict => "item already exists",
            Self::BadParamInput => "given parameter is not valid",
            Self::InsufficientFunds => "insufficient funds",
            Self::Forbidden => "access is forbidden",
            Self::InternalError => "internal server error",
        }
    }
}

/// Domain error carried from services to inbound adapters.
///
/// # Examples
/// ```
/// use spektr_gateway::domain::{Error, ErrorCode};
///
/// let err = Error::invalid_credentials();
/// assert_eq!(err.code(), ErrorCode::InvalidCredentials);
/// assert_eq!(err.message(), "invalid credentials");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
}

impl Error {
    /// Create an error with an explicit message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an error carrying the code's canonical message.
    pub fn from_code(code: ErrorCode) -> Self {
        Self::new(code, code.canonical_message())
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to the caller.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Canonical [`ErrorCode::InvalidCredentials`] error.
    pub fn invalid_credentials() -> Self {
        Self::from_code(ErrorCode::InvalidCredentials)
    }

    /// Canonical [`ErrorCode::SessionExpired`] error.
    pub fn session_expired() -> Self {
        Self::from_code(ErrorCode::SessionExpired)
    }

    /// Canonical [`ErrorCode::Unauthorized`] error.
    pub fn unauthorized() -> Self {
        Self::from_code(ErrorCode::Unauthorized)
    }

    /// Canonical [`ErrorCode::InvalidToken`] error.
    pub fn invalid_token() -> Self {
        Self::from_code(ErrorCode::InvalidToken)
    }

    /// Canonical [`ErrorCode::BadParamInput`] error.
    pub fn bad_param() -> Self {
        Self::from_code(ErrorCode::BadParamInput)
    }

    /// Canonical [`ErrorCode::InternalError`] error.
    pub fn internal() -> Self {
        Self::from_code(ErrorCode::InternalError)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_constructors_carry_canonical_messages() {
        assert_eq!(Error::session_expired().message(), "session has expired");
        assert_eq!(
            Error::from_code(ErrorCode::TooManyRequests).message(),
            "too many requests, please try again later"
        );
    }

    #[test]
    fn explicit_message_overrides_canonical_text() {
        let err = Error::new(ErrorCode::Unauthorized, "Authorization token is required");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), "Authorization token is required");
    }
}
