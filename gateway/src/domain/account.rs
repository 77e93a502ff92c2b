//! Account domain records.
//!
//! Everything here is sourced from upstream on each request; the gateway
//! holds no state of its own.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Placeholder returned in [`Profile::password`]; real passwords never
/// transit the gateway in responses.
pub const PASSWORD_PLACEHOLDER: &str = "********";

/// Login credentials for one sign-in attempt. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account login.
    pub login: String,
    /// Account password.
    pub password: String,
}

/// Upstream session identifier recovered from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a decoded upstream session id.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw upstream identifier.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Subscriber profile as served to clients.
///
/// `balance` of `0.0` may mean an unparseable upstream balance string, not a
/// verified zero balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    /// Upstream account identifier.
    pub id: String,
    /// Given name extracted from the upstream full name.
    pub first_name: String,
    /// Patronymic or middle names, space-joined.
    pub middle_name: String,
    /// Family name extracted from the upstream full name.
    pub last_name: String,
    /// Full name exactly as upstream stores it.
    pub full_name: String,
    /// Current balance extracted from the upstream prose string.
    pub balance: f64,
    /// Amount due for the next period.
    pub to_pay: f64,
    /// Tariff plan name.
    pub tariff: String,
    /// Contact e-mail.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Always [`PASSWORD_PLACEHOLDER`].
    pub password: String,
    /// Whether internet access is currently enabled.
    pub internet_status: bool,
    /// Next payment date, upstream free text.
    pub next_pay_date: String,
}

/// One subscriber notification. Ordering and duplication follow upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    /// Notification body text.
    pub body: String,
    /// Upstream notification category.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A repair ticket to be filed upstream. Write-only; upstream returns no
/// ticket identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairRequest {
    /// Short problem summary.
    pub subject: String,
    /// Free-text problem description.
    pub text: String,
}
