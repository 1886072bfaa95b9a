//! Driving port for creating and moving bookings.
//!
//! HTTP handlers call this port after authentication and body validation.
//! Implementations enforce the enrollment, ticket eligibility and room
//! capacity rules.

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Booking, BookingId, Error, RoomId, UserId};

/// Request to book a room for the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateBookingRequest {
    pub user_id: UserId,
    pub room_id: RoomId,
}

/// Request to move an existing booking to another room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateBookingRequest {
    /// The authenticated caller.
    pub user_id: UserId,
    /// Destination room.
    pub room_id: RoomId,
    /// Booking being moved.
    pub booking_id: BookingId,
}

/// Use-case port for booking mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Book a room for the caller.
    ///
    /// # Errors
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. enrollment-not-found when the caller is not enrolled;
    /// 2. forbidden when the ticket is remote, excludes the hotel or is unpaid;
    /// 3. not-found when the room does not exist;
    /// 4. forbidden when the room is full.
    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking, Error>;

    /// Move a booking to a different room.
    ///
    /// # Errors
    ///
    /// Forbidden when the booking does not exist, not-found when the room
    /// does not exist, forbidden when the room is full.
    async fn update_booking(&self, request: UpdateBookingRequest) -> Result<Booking, Error>;
}

/// Fixture command that accepts every request without persisting anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBookingCommand;

#[async_trait]
impl BookingCommand for FixtureBookingCommand {
    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking, Error> {
        let now = Utc::now();
        Ok(Booking {
            id: BookingId::new(1),
            user_id: request.user_id,
            room_id: request.room_id,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_booking(&self, request: UpdateBookingRequest) -> Result<Booking, Error> {
        let now = Utc::now();
        Ok(Booking {
            id: request.booking_id,
            user_id: request.user_id,
            room_id: request.room_id,
            created_at: now,
            updated_at: now,
        })
    }
}
