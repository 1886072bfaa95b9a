//! Driving port for reading the caller's booking.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::domain::{BookingId, BookingWithRoom, Error, HotelId, Room, RoomId, UserId};

/// Use-case port for booking lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// Fetch the booking held by `user_id` together with its room.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the user holds no booking.
    async fn booking_for_user(&self, user_id: UserId) -> Result<BookingWithRoom, Error>;
}

/// Fixture query returning a single deterministic booking.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookingQuery;

#[async_trait]
impl BookingQuery for FixtureBookingQuery {
    async fn booking_for_user(&self, _user_id: UserId) -> Result<BookingWithRoom, Error> {
        let timestamp = Utc.timestamp_opt(0, 0).single().unwrap_or_else(Utc::now);
        Ok(BookingWithRoom {
            id: BookingId::new(1),
            room: Room {
                id: RoomId::new(1),
                name: "101".to_owned(),
                capacity: 3,
                hotel_id: HotelId::new(1),
                created_at: timestamp,
                updated_at: timestamp,
            },
        })
    }
}
