//! Authentication handlers.
//!
//! ```text
//! POST /api/v1/auth/sign-in        {"login":"...","password":"..."}
//! POST /api/v1/auth/reset-password {"login":"..."}
//! POST /api/v1/auth/submit-password {"token":"...","new_password":"..."}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Credentials;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, ErrorBody, MessageResponse};

/// Sign-in request body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SignInRequest {
    /// Account login.
    pub login: String,
    /// Account password.
    pub password: String,
}

/// Successful sign-in reply.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Bearer token for subsequent calls.
    pub token: String,
}

/// Request body for starting a password reset.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ResetPasswordRequest {
    /// Account login to reset.
    pub login: String,
}

/// Request body for completing a password reset.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SubmitPasswordRequest {
    /// Reset token from the upstream e-mail.
    pub token: String,
    /// Replacement password.
    pub new_password: String,
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = TokenResponse),
        (status = 400, description = "Malformed payload", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 403, description = "Account locked", body = ErrorBody),
        (status = 429, description = "Too many requests", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "signIn",
    security([])
)]
#[post("/auth/sign-in")]
pub async fn sign_in(
    state: web::Data<HttpState>,
    payload: web::Json<SignInRequest>,
) -> ApiResult<web::Json<TokenResponse>> {
    let SignInRequest { login, password } = payload.into_inner();
    let token = state.auth.sign_in(Credentials { login, password }).await?;
    Ok(web::Json(TokenResponse { token }))
}

/// Start a password reset for an account login.
#[utoipa::path(
    post,
    path = "/api/v1/auth/reset-password",
    request_body = ResetPasswordRequest,
    responses(
        (status = 200, description = "Reset requested", body = MessageResponse),
        (status = 400, description = "Malformed payload", body = ErrorBody),
        (status = 401, description = "Unknown login", body = ErrorBody),
        (status = 429, description = "Too many requests", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "resetPassword",
    security([])
)]
#[post("/auth/reset-password")]
pub async fn reset_password(
    state: web::Data<HttpState>,
    payload: web::Json<ResetPasswordRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    state.auth.request_password_reset(&payload.login).await?;
    Ok(web::Json(MessageResponse::new("Password reset requested")))
}

/// Complete a password reset with the emailed token.
#[utoipa::path(
    post,
    path = "/api/v1/auth/submit-password",
    request_body = SubmitPasswordRequest,
    responses(
        (status = 200, description = "Password replaced", body = MessageResponse),
        (status = 400, description = "Malformed payload", body = ErrorBody),
        (status = 401, description = "Invalid token or password", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "submitPassword",
    security([])
)]
#[post("/auth/submit-password")]
pub async fn submit_password(
    state: web::Data<HttpState>,
    payload: web::Json<SubmitPasswordRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    state
        .auth
        .submit_password_reset(&payload.token, &payload.new_password)
        .await?;
    Ok(web::Json(MessageResponse::new(
        "Password changed successfully",
    )))
}
