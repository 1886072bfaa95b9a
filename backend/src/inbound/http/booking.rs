//! Hotel booking HTTP handlers.
//!
//! ```text
//! GET  /booking
//! POST /booking              {"roomId": 1}
//! PUT  /booking/{bookingId}  {"roomId": 2}
//! ```

use actix_web::{get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CreateBookingRequest, UpdateBookingRequest};
use crate::domain::{Booking, BookingId, BookingWithRoom, Error, RoomId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::AuthenticatedUser;
use crate::inbound::http::dto::RoomResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    DeferredJson, FieldName, json_body, missing_field_error, parse_id,
};

const ROOM_ID: FieldName = FieldName::new("roomId");
const BOOKING_ID: FieldName = FieldName::new("bookingId");

/// Request payload for creating or moving a booking.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[schema(example = 1)]
    pub room_id: Option<i32>,
}

impl BookingRequest {
    fn room_id(&self) -> Result<RoomId, Error> {
        self.room_id
            .map(RoomId::new)
            .ok_or_else(|| missing_field_error(ROOM_ID))
    }
}

/// The caller's booking with its room.
#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: i32,
    #[serde(rename = "Room")]
    pub room: RoomResponse,
}

impl From<BookingWithRoom> for BookingResponse {
    fn from(value: BookingWithRoom) -> Self {
        Self {
            id: value.id.get(),
            room: RoomResponse::from(value.room),
        }
    }
}

/// Identifier of a created or moved booking.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    #[schema(example = 1)]
    pub booking_id: i32,
}

impl From<Booking> for BookingIdResponse {
    fn from(value: Booking) -> Self {
        Self {
            booking_id: value.id.get(),
        }
    }
}

/// Fetch the authenticated user's booking.
#[utoipa::path(
    get,
    path = "/booking",
    responses(
        (status = 200, description = "Booking with its room", body = BookingResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "No booking", body = ErrorSchema)
    ),
    security(("bearer" = [])),
    tags = ["booking"],
    operation_id = "getBooking"
)]
#[get("/booking")]
pub async fn get_booking(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
) -> ApiResult<web::Json<BookingResponse>> {
    let booking = state.bookings_query.booking_for_user(user.user_id()).await?;
    Ok(web::Json(BookingResponse::from(booking)))
}

/// Book a room for the authenticated user.
#[utoipa::path(
    post,
    path = "/booking",
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Booking created", body = BookingIdResponse),
        (status = 400, description = "Invalid request or not enrolled", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Ticket not eligible or room full", body = ErrorSchema),
        (status = 404, description = "Room or ticket not found", body = ErrorSchema)
    ),
    security(("bearer" = [])),
    tags = ["booking"],
    operation_id = "createBooking"
)]
#[post("/booking")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    payload: DeferredJson<BookingRequest>,
) -> ApiResult<web::Json<BookingIdResponse>> {
    let room_id = json_body(payload)?.room_id()?;
    let booking = state
        .bookings
        .create_booking(CreateBookingRequest {
            user_id: user.user_id(),
            room_id,
        })
        .await?;
    Ok(web::Json(BookingIdResponse::from(booking)))
}

/// Move a booking to another room.
#[utoipa::path(
    put,
    path = "/booking/{bookingId}",
    request_body = BookingRequest,
    params(("bookingId" = i32, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "Booking moved", body = BookingIdResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "No booking or room full", body = ErrorSchema),
        (status = 404, description = "Room not found", body = ErrorSchema)
    ),
    security(("bearer" = [])),
    tags = ["booking"],
    operation_id = "updateBooking"
)]
#[put("/booking/{bookingId}")]
pub async fn update_booking(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: DeferredJson<BookingRequest>,
) -> ApiResult<web::Json<BookingIdResponse>> {
    let booking_id = BookingId::new(parse_id(&path.into_inner(), BOOKING_ID)?);
    let room_id = json_body(payload)?.room_id()?;
    let booking = state
        .bookings
        .update_booking(UpdateBookingRequest {
            user_id: user.user_id(),
            room_id,
            booking_id,
        })
        .await?;
    Ok(web::Json(BookingIdResponse::from(booking)))
}

#[cfg(test)]
#[path = "booking_tests.rs"]
mod tests;
