//! Port for reading rooms and their occupancy.

use async_trait::async_trait;

use crate::domain::{RoomId, RoomOccupancy};

use super::define_port_error;

define_port_error! {
    /// Errors raised by room repository adapters.
    pub enum RoomRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "room repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "room repository query failed: {message}",
    }
}

/// Read access to hotel rooms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Fetch a room together with the number of bookings referencing it.
    ///
    /// Returns `None` when the room does not exist.
    async fn find_with_occupancy(
        &self,
        room_id: RoomId,
    ) -> Result<Option<RoomOccupancy>, RoomRepositoryError>;
}
