//! Profile handlers.
//!
//! ```text
//! GET  /api/v1/profile
//! POST /api/v1/profile/change-password {"new_password":"..."}
//! POST /api/v1/profile/change-email    {"new_email":"..."}
//! POST /api/v1/profile/change-phone    {"new_phone":"..."}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Profile;
use crate::inbound::http::bearer::BearerToken;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, ErrorBody, MessageResponse};

/// Request body for a password change.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChangePasswordRequest {
    /// Replacement password.
    pub new_password: String,
}

/// Request body for an e-mail change.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChangeEmailRequest {
    /// Replacement contact e-mail.
    pub new_email: String,
}

/// Request body for a phone change.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChangePhoneRequest {
    /// Replacement contact phone.
    pub new_phone: String,
}

/// Fetch the subscriber profile. Always re-reads from upstream.
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "Subscriber profile", body = Profile),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 401, description = "Missing, invalid, or expired token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["profile"],
    operation_id = "getProfile"
)]
#[get("/profile")]
pub async fn profile(
    state: web::Data<HttpState>,
    token: BearerToken,
) -> ApiResult<web::Json<Profile>> {
    let profile = state.profile.profile(token.as_str()).await?;
    Ok(web::Json(profile))
}

/// Replace the account password.
#[utoipa::path(
    post,
    path = "/api/v1/profile/change-password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password replaced", body = MessageResponse),
        (status = 400, description = "Malformed payload", body = ErrorBody),
        (status = 401, description = "Policy violation or bad token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["profile"],
    operation_id = "changePassword"
)]
#[post("/profile/change-password")]
pub async fn change_password(
    state: web::Data<HttpState>,
    token: BearerToken,
    payload: web::Json<ChangePasswordRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    state
        .profile
        .change_password(token.as_str(), &payload.new_password)
        .await?;
    Ok(web::Json(MessageResponse::new(
        "Password changed successfully",
    )))
}

/// Replace the contact e-mail.
#[utoipa::path(
    post,
    path = "/api/v1/profile/change-email",
    request_body = ChangeEmailRequest,
    responses(
        (status = 200, description = "E-mail replaced", body = MessageResponse),
        (status = 400, description = "Malformed payload or empty e-mail", body = ErrorBody),
        (status = 401, description = "Bad field or bad token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["profile"],
    operation_id = "changeEmail"
)]
#[post("/profile/change-email")]
pub async fn change_email(
    state: web::Data<HttpState>,
    token: BearerToken,
    payload: web::Json<ChangeEmailRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    state
        .profile
        .change_email(token.as_str(), &payload.new_email)
        .await?;
    Ok(web::Json(MessageResponse::new("Email changed successfully")))
}

/// Replace the contact phone number.
#[utoipa::path(
    post,
    path = "/api/v1/profile/change-phone",
    request_body = ChangePhoneRequest,
    responses(
        (status = 200, description = "Phone replaced", body = MessageResponse),
        (status = 400, description = "Malformed payload or empty phone", body = ErrorBody),
        (status = 401, description = "Bad field or bad token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["profile"],
    operation_id = "changePhone"
)]
#[post("/profile/change-phone")]
pub async fn change_phone(
    state: web::Data<HttpState>,
    token: BearerToken,
    payload: web::Json<ChangePhoneRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    state
        .profile
        .change_phone(token.as_str(), &payload.new_phone)
        .await?;
    Ok(web::Json(MessageResponse::new("Phone changed successfully")))
}
