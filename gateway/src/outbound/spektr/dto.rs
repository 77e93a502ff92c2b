//! Transport DTOs for decoding Spektr replies.
//!
//! The adapter decodes into these first, then maps into domain records in
//! one pass, running the field normalizers as it goes.

use serde::Deserialize;

use super::normalize::{extract_balance, flag_enabled, split_full_name};
use crate::domain::{Notification, PASSWORD_PLACEHOLDER, Profile};

/// Ack-style reply: an object whose only interesting field is `error`.
#[derive(Debug, Deserialize)]
pub(super) struct AckDto {
    #[serde(default)]
    pub(super) error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LoginReplyDto {
    #[serde(default)]
    pub(super) error: Option<String>,
    #[serde(default)]
    pub(super) session_id: Option<String>,
}

/// A field upstream serves as either a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum NumberOrText {
    Number(f64),
    Text(String),
}

impl Default for NumberOrText {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl NumberOrText {
    fn as_f64(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse().unwrap_or(0.0),
        }
    }

    fn into_text(self) -> String {
        match self {
            Self::Number(value) => {
                // Account ids are integral; keep "10001466" rather than "10001466.0".
                if value.fract() == 0.0 {
                    format!("{value:.0}")
                } else {
                    value.to_string()
                }
            }
            Self::Text(text) => text,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ProfileReplyDto {
    #[serde(default)]
    pub(super) error: Option<String>,
    #[serde(default)]
    uid: NumberOrText,
    #[serde(default)]
    fio: String,
    #[serde(default)]
    balance: String,
    #[serde(default)]
    to_pay: NumberOrText,
    #[serde(default)]
    tariff: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    internet: String,
    #[serde(default)]
    next_pay_date: String,
}

impl ProfileReplyDto {
    pub(super) fn into_profile(self) -> Profile {
        let names = split_full_name(&self.fio);
        Profile {
            id: self.uid.into_text(),
            first_name: names.first,
            middle_name: names.middle,
            last_name: names.last,
            full_name: self.fio,
            balance: extract_balance(&self.balance),
            to_pay: self.to_pay.as_f64(),
            tariff: self.tariff,
            email: self.email,
            phone: self.phone,
            password: PASSWORD_PLACEHOLDER.into(),
            internet_status: flag_enabled(&self.internet),
            next_pay_date: self.next_pay_date,
        }
    }
}

/// The notifications list arrives in one of two shapes: a wrapping object
/// with a `notifications` field, or a bare array. Neither shape matching is
/// a decode error, not a silent empty list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum NotificationsReplyDto {
    Envelope {
        #[serde(default)]
        error: Option<String>,
        #[serde(default)]
        notifications: Vec<NotificationDto>,
    },
    Bare(Vec<NotificationDto>),
}

impl NotificationsReplyDto {
    /// The upstream error text, when the envelope shape carried one.
    pub(super) fn error_text(&self) -> Option<&str> {
        match self {
            Self::Envelope {
                error: Some(text), ..
            } if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }

    pub(super) fn into_notifications(self) -> Vec<Notification> {
        let items = match self {
            Self::Envelope { notifications, .. } => notifications,
            Self::Bare(notifications) => notifications,
        };
        items.into_iter().map(NotificationDto::into_domain).collect()
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct NotificationDto {
    #[serde(default)]
    text: String,
    #[serde(default, rename = "type")]
    kind: String,
}

impl NotificationDto {
    fn into_domain(self) -> Notification {
        Notification {
            body: self.text,
            kind: self.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_mapping_runs_every_normalizer() {
        let reply: ProfileReplyDto = serde_json::from_str(
            r#"{
                "uid": "10001466",
                "fio": "Ivanov Ivanovich Ivan",
                "balance": "№ 10001466 Баланс: 390.67",
                "to_pay": "150.50",
                "tariff": "Home 100",
                "email": "ivanov@example.com",
                "phone": "+79990000000",
                "internet": "1",
                "next_pay_date": "2025-02-01"
            }"#,
        )
        .expect("profile JSON");

        let profile = reply.into_profile();
        assert_eq!(profile.id, "10001466");
        assert_eq!(profile.last_name, "Ivanov");
        assert_eq!(profile.middle_name, "Ivanovich");
        assert_eq!(profile.first_name, "Ivan");
        assert_eq!(profile.full_name, "Ivanov Ivanovich Ivan");
        assert_eq!(profile.balance, 390.67);
        assert_eq!(profile.to_pay, 150.5);
        assert!(profile.internet_status);
        assert_eq!(profile.password, PASSWORD_PLACEHOLDER);
    }

    #[test]
    fn profile_tolerates_numeric_ids_and_amounts() {
        let reply: ProfileReplyDto =
            serde_json::from_str(r#"{"uid": 10001466, "to_pay": 150.5, "internet": "0"}"#)
                .expect("profile JSON");

        let profile = reply.into_profile();
        assert_eq!(profile.id, "10001466");
        assert_eq!(profile.to_pay, 150.5);
        assert!(!profile.internet_status);
        // Missing balance prose reads as the unparseable sentinel.
        assert_eq!(profile.balance, 0.0);
    }

    #[test]
    fn notifications_decode_from_both_shapes() {
        let envelope: NotificationsReplyDto = serde_json::from_str(
            r#"{"notifications": [{"text": "Оплатите счёт", "type": "billing"}]}"#,
        )
        .expect("envelope shape");
        assert!(envelope.error_text().is_none());
        assert_eq!(
            envelope.into_notifications(),
            vec![Notification {
                body: "Оплатите счёт".into(),
                kind: "billing".into(),
            }]
        );

        let bare: NotificationsReplyDto =
            serde_json::from_str(r#"[{"text": "Авария на линии", "type": "outage"}]"#)
                .expect("bare shape");
        assert_eq!(bare.into_notifications().len(), 1);
    }

    #[test]
    fn notifications_envelope_surfaces_error_text() {
        let reply: NotificationsReplyDto =
            serde_json::from_str(r#"{"error": "Необходимо авторизоваться"}"#)
                .expect("error envelope");
        assert_eq!(reply.error_text(), Some("Необходимо авторизоваться"));
        assert!(reply.into_notifications().is_empty());
    }

    #[test]
    fn notifications_reject_bodies_matching_neither_shape() {
        assert!(serde_json::from_str::<NotificationsReplyDto>(r#""just a string""#).is_err());
        assert!(serde_json::from_str::<NotificationsReplyDto>("[1, 2, 3]").is_err());
    }
}
