//! PostgreSQL-backed `BookingRepository`.
//!
//! `bookings.user_id` is unique, so a second booking for the same user is
//! rejected by the database even when two requests race past the rule checks.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BookingRepository, BookingRepositoryError};
use crate::domain::{Booking, BookingId, BookingWithRoom, NewBooking, Room, RoomId, UserId};

use super::diesel_error_mapping::{
    ConstraintViolation, constraint_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{BookingRoomUpdate, BookingRow, NewBookingRow, RoomRow};
use super::pool::{DbPool, PoolError};
use super::schema::{bookings, rooms};

/// Diesel implementation of the booking port.
#[derive(Clone)]
pub struct DieselBookingRepository {
    pool: DbPool,
}

impl DieselBookingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookingRepositoryError {
    map_basic_pool_error(error, |message| BookingRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> BookingRepositoryError {
    map_basic_diesel_error(
        error,
        |message| BookingRepositoryError::query(message),
        |message| BookingRepositoryError::connection(message),
    )
}

fn map_insert_error(error: diesel::result::Error) -> BookingRepositoryError {
    match constraint_violation(&error) {
        Some(ConstraintViolation::Unique) => BookingRepositoryError::duplicate_booking(),
        _ => map_diesel_error(error),
    }
}

#[async_trait]
impl BookingRepository for DieselBookingRepository {
    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<BookingWithRoom>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(BookingRow, RoomRow)> = bookings::table
            .inner_join(rooms::table)
            .filter(bookings::user_id.eq(user_id.get()))
            .select((BookingRow::as_select(), RoomRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(|(booking, room)| BookingWithRoom {
            id: BookingId::new(booking.id),
            room: Room::from(room),
        }))
    }

    async fn find_by_id(
        &self,
        booking_id: BookingId,
    ) -> Result<Option<Booking>, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BookingRow> = bookings::table
            .find(booking_id.get())
            .select(BookingRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Booking::from))
    }

    async fn create(&self, booking: NewBooking) -> Result<Booking, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewBookingRow {
            user_id: booking.user_id.get(),
            room_id: booking.room_id.get(),
        };

        let row: BookingRow = diesel::insert_into(bookings::table)
            .values(&new_row)
            .returning(BookingRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_insert_error)?;

        Ok(Booking::from(row))
    }

    async fn update_room(
        &self,
        booking_id: BookingId,
        room_id: RoomId,
    ) -> Result<Booking, BookingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = BookingRoomUpdate {
            room_id: room_id.get(),
            updated_at: Utc::now(),
        };

        let row: BookingRow = diesel::update(bookings::table.find(booking_id.get()))
            .set(&changes)
            .returning(BookingRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Booking::from(row))
    }
}
