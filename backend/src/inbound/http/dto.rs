//! Response payloads shared by several endpoints.
//!
//! Timestamps are rendered as RFC 3339 with millisecond precision and a `Z`
//! suffix.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Room, TicketType};

pub(crate) fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Hotel room as returned to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "101")]
    pub name: String,
    #[schema(example = 3)]
    pub capacity: i32,
    pub hotel_id: i32,
    #[schema(example = "2024-01-01T00:00:00.000Z")]
    pub created_at: String,
    pub updated_at: String,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            capacity: value.capacity,
            hotel_id: value.hotel_id.get(),
            created_at: format_timestamp(value.created_at),
            updated_at: format_timestamp(value.updated_at),
        }
    }
}

/// Ticket catalogue entry as returned to clients.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeResponse {
    pub id: i32,
    #[schema(example = "Presencial + Hotel")]
    pub name: String,
    #[schema(example = 600)]
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<TicketType> for TicketTypeResponse {
    fn from(value: TicketType) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            price: value.price,
            is_remote: value.is_remote,
            includes_hotel: value.includes_hotel,
            created_at: format_timestamp(value.created_at),
            updated_at: format_timestamp(value.updated_at),
        }
    }
}
