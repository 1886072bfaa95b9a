//! Booking rule engine.
//!
//! Implements [`BookingQuery`] and [`BookingCommand`] over the enrollment,
//! ticket, room and booking repositories. Creation checks run in a fixed
//! order (enrollment, ticket eligibility, room existence, capacity) and stop
//! at the first failure.
//!
//! The capacity check reads the current count and then writes; two
//! concurrent reservations for the last slot can both succeed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    BookingCommand, BookingQuery, BookingRepository, BookingRepositoryError, CreateBookingRequest,
    EnrollmentRepository, RoomRepository, RoomRepositoryError, TicketRepository,
    UpdateBookingRequest,
};
use crate::domain::repository_errors::{map_enrollment_error, map_ticket_error};
use crate::domain::{
    Booking, BookingWithRoom, Error, HotelIneligibility, NewBooking, RoomId, RoomOccupancy, UserId,
};

/// Forbidden message for bookings backed by a remote ticket.
pub const REMOTE_TICKET_MESSAGE: &str = "Booking is not allowed for Remote TicketTypes";
/// Forbidden message for bookings backed by a ticket without hotel.
pub const HOTEL_NOT_INCLUDED_MESSAGE: &str =
    "Booking is not allowed for TicketTypes that not includes Hotel";
/// Forbidden message for bookings backed by an unpaid ticket.
pub const UNPAID_TICKET_MESSAGE: &str = "Booking will be allowed when ticket status be \"PAID\"";
/// Forbidden message when the target room has no free place.
pub const ROOM_FULL_MESSAGE: &str = "Room capacity is full";
/// Forbidden message when moving a booking the user does not have.
pub const NO_BOOKING_MESSAGE: &str = "User doesnt have a booking";
/// Forbidden message for a second booking by the same user.
pub const DUPLICATE_BOOKING_MESSAGE: &str = "User already has a booking";

/// Booking service implementing the booking driving ports.
#[derive(Clone)]
pub struct BookingService<E, T, R, B> {
    enrollments: Arc<E>,
    tickets: Arc<T>,
    rooms: Arc<R>,
    bookings: Arc<B>,
}

impl<E, T, R, B> BookingService<E, T, R, B> {
    /// Create a new service with the given repositories.
    pub fn new(enrollments: Arc<E>, tickets: Arc<T>, rooms: Arc<R>, bookings: Arc<B>) -> Self {
        Self {
            enrollments,
            tickets,
            rooms,
            bookings,
        }
    }
}

fn map_room_error(error: RoomRepositoryError) -> Error {
    match error {
        RoomRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("room repository unavailable: {message}"))
        }
        RoomRepositoryError::Query { message } => {
            Error::internal(format!("room repository error: {message}"))
        }
    }
}

fn map_booking_error(error: BookingRepositoryError) -> Error {
    match error {
        BookingRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("booking repository unavailable: {message}"))
        }
        BookingRepositoryError::Query { message } => {
            Error::internal(format!("booking repository error: {message}"))
        }
        BookingRepositoryError::DuplicateBooking => Error::forbidden(DUPLICATE_BOOKING_MESSAGE),
    }
}

fn ineligibility_error(reason: HotelIneligibility) -> Error {
    let message = match reason {
        HotelIneligibility::Remote => REMOTE_TICKET_MESSAGE,
        HotelIneligibility::HotelNotIncluded => HOTEL_NOT_INCLUDED_MESSAGE,
        HotelIneligibility::Unpaid => UNPAID_TICKET_MESSAGE,
    };
    Error::forbidden(message)
}

impl<E, T, R, B> BookingService<E, T, R, B>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    R: RoomRepository,
    B: BookingRepository,
{
    async fn ensure_hotel_eligible(&self, user_id: UserId) -> Result<(), Error> {
        let enrollment = self
            .enrollments
            .find_by_user_id(user_id)
            .await
            .map_err(map_enrollment_error)?
            .ok_or_else(|| {
                debug!(%user_id, "booking rejected: user not enrolled");
                Error::enrollment_not_found()
            })?;

        let ticket = self
            .tickets
            .find_by_enrollment_id(enrollment.id)
            .await
            .map_err(map_ticket_error)?
            .ok_or_else(|| {
                debug!(%user_id, "booking rejected: enrollment has no ticket");
                Error::no_result()
            })?;

        ticket.hotel_eligibility().map_err(|reason| {
            debug!(%user_id, ?reason, "booking rejected: ticket not eligible");
            ineligibility_error(reason)
        })
    }

    /// Resolve the room and reject it when no slot is left.
    async fn room_with_vacancy(&self, room_id: RoomId) -> Result<RoomOccupancy, Error> {
        let occupancy = self
            .rooms
            .find_with_occupancy(room_id)
            .await
            .map_err(map_room_error)?
            .ok_or_else(|| {
                debug!(%room_id, "booking rejected: room not found");
                Error::no_result()
            })?;

        if occupancy.is_full() {
            debug!(
                %room_id,
                capacity = occupancy.room.capacity,
                bookings = occupancy.booking_count,
                "booking rejected: room full"
            );
            return Err(Error::forbidden(ROOM_FULL_MESSAGE));
        }
        Ok(occupancy)
    }
}

#[async_trait]
impl<E, T, R, B> BookingQuery for BookingService<E, T, R, B>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    R: RoomRepository,
    B: BookingRepository,
{
    async fn booking_for_user(&self, user_id: UserId) -> Result<BookingWithRoom, Error> {
        self.bookings
            .find_by_user_id(user_id)
            .await
            .map_err(map_booking_error)?
            .ok_or_else(Error::no_result)
    }
}

#[async_trait]
impl<E, T, R, B> BookingCommand for BookingService<E, T, R, B>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    R: RoomRepository,
    B: BookingRepository,
{
    async fn create_booking(&self, request: CreateBookingRequest) -> Result<Booking, Error> {
        let CreateBookingRequest { user_id, room_id } = request;
        self.ensure_hotel_eligible(user_id).await?;
        self.room_with_vacancy(room_id).await?;

        let booking = self
            .bookings
            .create(NewBooking { user_id, room_id })
            .await
            .map_err(map_booking_error)?;
        info!(booking_id = %booking.id, %user_id, %room_id, "booking created");
        Ok(booking)
    }

    async fn update_booking(&self, request: UpdateBookingRequest) -> Result<Booking, Error> {
        let UpdateBookingRequest {
            user_id,
            room_id,
            booking_id,
        } = request;

        // Ownership is not checked: any caller may move any existing booking.
        self.bookings
            .find_by_id(booking_id)
            .await
            .map_err(map_booking_error)?
            .ok_or_else(|| {
                debug!(%booking_id, %user_id, "booking update rejected: no such booking");
                Error::forbidden(NO_BOOKING_MESSAGE)
            })?;

        // The moved booking is not discounted from the destination count.
        self.room_with_vacancy(room_id).await?;

        let booking = self
            .bookings
            .update_room(booking_id, room_id)
            .await
            .map_err(map_booking_error)?;
        info!(%booking_id, %user_id, %room_id, "booking moved");
        Ok(booking)
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
