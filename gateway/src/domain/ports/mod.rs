//! Driven ports for the upstream account-management API.
//!
//! The domain owns the request and response shapes so services stay
//! adapter-agnostic; the reqwest adapter in `outbound::spektr` implements
//! these traits.

mod auth_gateway;
mod notification_gateway;
mod profile_gateway;
mod repair_gateway;

pub use auth_gateway::AuthGateway;
pub use notification_gateway::NotificationGateway;
pub use profile_gateway::ProfileGateway;
pub use repair_gateway::RepairGateway;

#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
#[cfg(test)]
pub use notification_gateway::MockNotificationGateway;
#[cfg(test)]
pub use profile_gateway::MockProfileGateway;
#[cfg(test)]
pub use repair_gateway::MockRepairGateway;

use crate::domain::ErrorCode;

/// Errors surfaced while calling the upstream API.
///
/// `Rejected` carries an already-classified domain code and passes through
/// services unchanged; `Unrecognized` marks upstream error text with no entry
/// in the classification table so new strings can be triaged instead of
/// vanishing into the internal-error bucket.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// Network transport failed before a response arrived.
    #[error("upstream transport failed: {message}")]
    Transport {
        /// Transport-level failure description.
        message: String,
    },
    /// The upstream call exceeded the configured timeout.
    #[error("upstream timeout: {message}")]
    Timeout {
        /// Timeout description.
        message: String,
    },
    /// Upstream answered with a non-success HTTP status.
    #[error("upstream returned status {code}")]
    Status {
        /// HTTP status code received.
        code: u16,
    },
    /// The upstream body did not match any expected shape.
    #[error("upstream response decode failed: {message}")]
    Decode {
        /// Decoder failure description.
        message: String,
    },
    /// Upstream rejected the call with a recognized error string.
    #[error("upstream rejected call: {message}")]
    Rejected {
        /// Classified domain code for the rejection.
        code: ErrorCode,
        /// Raw upstream error text.
        message: String,
    },
    /// Upstream rejected the call with text missing from the
    /// classification table.
    #[error("unrecognized upstream error: {message}")]
    Unrecognized {
        /// Raw upstream error text.
        message: String,
    },
}

impl UpstreamError {
    /// Transport-failure constructor.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Timeout constructor.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Non-success HTTP status constructor.
    pub fn status(code: u16) -> Self {
        Self::Status { code }
    }

    /// Decode-failure constructor.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Classified-rejection constructor.
    pub fn rejected(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Rejected {
            code,
            message: message.into(),
        }
    }

    /// Unmapped-rejection constructor.
    pub fn unrecognized(message: impl Into<String>) -> Self {
        Self::Unrecognized {
            message: message.into(),
        }
    }
}
