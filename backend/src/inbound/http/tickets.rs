//! Ticket HTTP handlers.
//!
//! ```text
//! GET  /tickets/types
//! GET  /tickets
//! POST /tickets        {"ticketTypeId": 1}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Ticket, TicketTypeId};
use crate::domain::ports::CreateTicketRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::dto::{TicketTypeResponse, format_timestamp};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{DeferredJson, json_body};

/// Request payload for reserving a ticket.
///
/// `ticketTypeId` is optional at the HTTP layer; absence is reported by the
/// ticket rules as invalid data.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    #[schema(example = 1)]
    pub ticket_type_id: Option<i32>,
}

/// An issued ticket with its ticket type.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: i32,
    #[schema(example = "RESERVED")]
    pub status: String,
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
    #[serde(rename = "TicketType")]
    pub ticket_type: TicketTypeResponse,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Ticket> for TicketResponse {
    fn from(value: Ticket) -> Self {
        Self {
            id: value.id.get(),
            status: value.status.to_string(),
            ticket_type_id: value.ticket_type_id.get(),
            enrollment_id: value.enrollment_id.get(),
            ticket_type: TicketTypeResponse::from(value.ticket_type),
            created_at: format_timestamp(value.created_at),
            updated_at: format_timestamp(value.updated_at),
        }
    }
}

/// List the ticket type catalogue.
#[utoipa::path(
    get,
    path = "/tickets/types",
    responses(
        (status = 200, description = "Ticket types", body = [TicketTypeResponse]),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    security(("bearer" = [])),
    tags = ["tickets"],
    operation_id = "listTicketTypes"
)]
#[get("/tickets/types")]
pub async fn list_ticket_types(
    state: web::Data<HttpState>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<TicketTypeResponse>>> {
    let types = state.tickets_query.ticket_types().await?;
    Ok(web::Json(
        types.into_iter().map(TicketTypeResponse::from).collect(),
    ))
}

/// Fetch the authenticated user's ticket.
#[utoipa::path(
    get,
    path = "/tickets",
    responses(
        (status = 200, description = "Ticket with its type", body = TicketResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "No enrollment or ticket", body = ErrorSchema)
    ),
    security(("bearer" = [])),
    tags = ["tickets"],
    operation_id = "getTicket"
)]
#[get("/tickets")]
pub async fn get_ticket(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
) -> ApiResult<web::Json<TicketResponse>> {
    let ticket = state.tickets_query.ticket_for_user(user.user_id()).await?;
    Ok(web::Json(TicketResponse::from(ticket)))
}

/// Reserve a ticket for the authenticated user.
#[utoipa::path(
    post,
    path = "/tickets",
    request_body = TicketRequest,
    responses(
        (status = 201, description = "Ticket reserved", body = TicketResponse),
        (status = 400, description = "Invalid ticket type", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "No enrollment", body = ErrorSchema)
    ),
    security(("bearer" = [])),
    tags = ["tickets"],
    operation_id = "createTicket"
)]
#[post("/tickets")]
pub async fn create_ticket(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    payload: DeferredJson<TicketRequest>,
) -> ApiResult<HttpResponse> {
    let payload = json_body(payload)?;
    let ticket = state
        .tickets
        .create_ticket(CreateTicketRequest {
            user_id: user.user_id(),
            ticket_type_id: payload.ticket_type_id.map(TicketTypeId::new),
        })
        .await?;
    Ok(HttpResponse::Created().json(TicketResponse::from(ticket)))
}

#[cfg(test)]
#[path = "tickets_tests.rs"]
mod tests;
