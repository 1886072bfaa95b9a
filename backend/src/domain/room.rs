//! Hotel rooms and their current occupancy.

use chrono::{DateTime, Utc};

use crate::domain::{HotelId, RoomId};

/// A bookable room belonging to a hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: HotelId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A room together with the number of bookings currently referencing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomOccupancy {
    pub room: Room,
    pub booking_count: i64,
}

impl RoomOccupancy {
    /// Whether no further booking may be placed in the room.
    ///
    /// Treats an already over-booked room as full.
    pub fn is_full(&self) -> bool {
        self.booking_count >= i64::from(self.room.capacity)
    }
}
