//! Hotel room bookings.

use chrono::{DateTime, Utc};

use crate::domain::{BookingId, Room, RoomId, UserId};

/// A user's reservation of one room. A user holds at most one booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The caller-facing view of a booking: its id and the booked room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWithRoom {
    pub id: BookingId,
    pub room: Room,
}

/// Insert payload for a new booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewBooking {
    pub user_id: UserId,
    pub room_id: RoomId,
}
