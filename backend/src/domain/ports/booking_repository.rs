//! Port for booking persistence.

use async_trait::async_trait;

use crate::domain::{Booking, BookingId, BookingWithRoom, NewBooking, RoomId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by booking repository adapters.
    pub enum BookingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "booking repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "booking repository query failed: {message}",
        /// The user already holds a booking.
        DuplicateBooking => "user already holds a booking",
    }
}

/// Persistence for room bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Fetch the booking held by `user_id`, including the booked room.
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<BookingWithRoom>, BookingRepositoryError>;

    /// Fetch a booking by its identifier.
    async fn find_by_id(
        &self,
        booking_id: BookingId,
    ) -> Result<Option<Booking>, BookingRepositoryError>;

    /// Insert a booking.
    ///
    /// # Errors
    ///
    /// [`BookingRepositoryError::DuplicateBooking`] when the user already
    /// holds a booking.
    async fn create(&self, booking: NewBooking) -> Result<Booking, BookingRepositoryError>;

    /// Move a booking to another room and refresh its `updated_at`.
    async fn update_room(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> Result<Booking, BookingRepositoryError>;
}
