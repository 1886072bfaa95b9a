//! PostgreSQL-backed `RoomRepository`.
//!
//! Occupancy is a live `COUNT(*)` over `bookings`; nothing is cached or
//! denormalised onto the room row.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RoomRepository, RoomRepositoryError};
use crate::domain::{Room, RoomId, RoomOccupancy};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::RoomRow;
use super::pool::{DbPool, PoolError};
use super::schema::{bookings, rooms};

/// Diesel implementation of the room occupancy port.
#[derive(Clone)]
pub struct DieselRoomRepository {
    pool: DbPool,
}

impl DieselRoomRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RoomRepositoryError {
    map_basic_pool_error(error, |message| RoomRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> RoomRepositoryError {
    map_basic_diesel_error(
        error,
        |message| RoomRepositoryError::query(message),
        |message| RoomRepositoryError::connection(message),
    )
}

#[async_trait]
impl RoomRepository for DieselRoomRepository {
    async fn find_with_occupancy(
        &self,
        room_id: RoomId,
    ) -> Result<Option<RoomOccupancy>, RoomRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RoomRow> = rooms::table
            .find(room_id.get())
            .select(RoomRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let booking_count: i64 = bookings::table
            .filter(bookings::room_id.eq(room_id.get()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(RoomOccupancy {
            room: Room::from(row),
            booking_count,
        }))
    }
}
