//! Notification handlers.
//!
//! ```text
//! GET /api/v1/notifications
//! ```

use actix_web::{get, web};

use crate::domain::Notification;
use crate::inbound::http::bearer::BearerToken;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, ErrorBody};

/// List notifications for the authenticated subscriber.
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    responses(
        (status = 200, description = "Notifications, upstream order", body = [Notification]),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["notifications"],
    operation_id = "listNotifications"
)]
#[get("/notifications")]
pub async fn notifications(
    state: web::Data<HttpState>,
    token: BearerToken,
) -> ApiResult<web::Json<Vec<Notification>>> {
    let notifications = state.notifications.notifications(token.as_str()).await?;
    Ok(web::Json(notifications))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{MockGateways, state_from, test_app, token_for};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::Value;

    #[actix_web::test]
    async fn lists_notifications_in_upstream_order() {
        let mut mocks = MockGateways::default();
        mocks.notifications.expect_notifications().times(1).return_once(|_| {
            Ok(vec![
                Notification {
                    body: "Оплатите счёт".into(),
                    kind: "billing".into(),
                },
                Notification {
                    body: "Авария на линии".into(),
                    kind: "outage".into(),
                },
            ])
        });
        let app = actix_test::init_service(test_app(state_from(mocks))).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/notifications")
            .insert_header(("Authorization", format!("Bearer {}", token_for("sess42"))))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON");
        let items = body.as_array().expect("array body");
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0].get("type").and_then(Value::as_str),
            Some("billing")
        );
        assert_eq!(
            items[0].get("body").and_then(Value::as_str),
            Some("Оплатите счёт")
        );
    }

    #[actix_web::test]
    async fn expired_sessions_report_as_401() {
        use crate::domain::ErrorCode;
        use crate::domain::ports::UpstreamError;

        let mut mocks = MockGateways::default();
        mocks.notifications.expect_notifications().times(1).return_once(|_| {
            Err(UpstreamError::rejected(
                ErrorCode::SessionExpired,
                "Необходимо авторизоваться",
            ))
        });
        let app = actix_test::init_service(test_app(state_from(mocks))).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/notifications")
            .insert_header(("Authorization", format!("Bearer {}", token_for("sess42"))))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON");
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("session has expired")
        );
    }
}
