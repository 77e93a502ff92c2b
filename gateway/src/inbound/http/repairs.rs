//! Repair-ticket handlers.
//!
//! ```text
//! POST /api/v1/repairs {"subject":"...","text":"..."}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::RepairRequest;
use crate::inbound::http::bearer::BearerToken;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{ApiResult, ErrorBody, MessageResponse};

/// Repair-ticket request body.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RepairTicketRequest {
    /// Short problem summary.
    pub subject: String,
    /// Free-text problem description.
    pub text: String,
}

/// File a repair ticket for the authenticated subscriber.
#[utoipa::path(
    post,
    path = "/api/v1/repairs",
    request_body = RepairTicketRequest,
    responses(
        (status = 201, description = "Ticket filed", body = MessageResponse),
        (status = 400, description = "Malformed payload or empty field", body = ErrorBody),
        (status = 401, description = "Bad field or bad token", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["repairs"],
    operation_id = "createRepair"
)]
#[post("/repairs")]
pub async fn create_repair(
    state: web::Data<HttpState>,
    token: BearerToken,
    payload: web::Json<RepairTicketRequest>,
) -> ApiResult<HttpResponse> {
    let RepairTicketRequest { subject, text } = payload.into_inner();
    state
        .repairs
        .create_ticket(token.as_str(), RepairRequest { subject, text })
        .await?;
    Ok(HttpResponse::Created().json(MessageResponse::new("Repair created")))
}
