//! Numeric identifier newtypes for persisted entities.
//!
//! Every table in the store uses a serial `integer` primary key. Wrapping
//! each one in its own type keeps a `RoomId` from being passed where a
//! `BookingId` is expected. All identifiers serialise transparently as JSON
//! numbers so the wire format stays `{ "roomId": 3 }`.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    (
        $(#[$outer:meta])*
        $name:ident
    ) => {
        $(#[$outer])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw database identifier.
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Raw database identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Identifier of a registered user.
    UserId
}

define_id! {
    /// Identifier of a user's event enrollment.
    EnrollmentId
}

define_id! {
    /// Identifier of a ticket catalogue entry.
    TicketTypeId
}

define_id! {
    /// Identifier of an issued ticket.
    TicketId
}

define_id! {
    /// Identifier of a hotel.
    HotelId
}

define_id! {
    /// Identifier of a bookable hotel room.
    RoomId
}

define_id! {
    /// Identifier of a room booking.
    BookingId
}
