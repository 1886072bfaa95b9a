//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer, the
//! schema wrappers for domain types, and the bearer-token security scheme.
//! Swagger UI serves it under `/docs` in debug builds.

use crate::inbound::http::booking::{BookingIdResponse, BookingRequest, BookingResponse};
use crate::inbound::http::dto::{RoomResponse, TicketTypeResponse};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::tickets::{TicketRequest, TicketResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the bearer security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Access token bound to a persisted login session."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Drivent event API",
        description = "Ticket reservation and hotel room booking for enrolled attendees."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("bearer" = [])),
    paths(
        crate::inbound::http::booking::get_booking,
        crate::inbound::http::booking::create_booking,
        crate::inbound::http::booking::update_booking,
        crate::inbound::http::tickets::list_ticket_types,
        crate::inbound::http::tickets::get_ticket,
        crate::inbound::http::tickets::create_ticket,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        BookingRequest,
        BookingResponse,
        BookingIdResponse,
        RoomResponse,
        TicketRequest,
        TicketResponse,
        TicketTypeResponse
    )),
    tags(
        (name = "booking", description = "Hotel room bookings"),
        (name = "tickets", description = "Ticket catalogue and reservations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
