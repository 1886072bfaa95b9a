//! Domain primitives, rule engines and ports.
//!
//! Purpose: define the event entities (enrollments, tickets, rooms,
//! bookings), the rules governing ticket issuance and hotel booking, and the
//! ports through which adapters drive and are driven by those rules.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable error identifier.
//! - BookingService / TicketService: rule engines implementing the driving
//!   ports in [`ports`].
//! - SessionAuthenticator: bearer-token authentication over sessions.

pub mod auth;
pub mod booking;
pub mod booking_service;
pub mod enrollment;
pub mod error;
pub mod ids;
pub mod ports;
mod repository_errors;
pub mod room;
pub mod ticket;
pub mod ticket_service;
pub mod trace_id;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::auth::{AccessTokenClaims, Session, SessionAuthenticator};
pub use self::booking::{Booking, BookingWithRoom, NewBooking};
pub use self::booking_service::BookingService;
pub use self::enrollment::{Address, Enrollment};
pub use self::error::{
    Error, ErrorCode, ErrorValidationError, NO_RESULT_MESSAGE, NOT_ENROLLED_MESSAGE,
};
pub use self::ids::{BookingId, EnrollmentId, HotelId, RoomId, TicketId, TicketTypeId, UserId};
pub use self::room::{Room, RoomOccupancy};
pub use self::ticket::{
    HotelIneligibility, NewTicket, Ticket, TicketStatus, TicketType, UnknownTicketStatus,
};
pub use self::ticket_service::TicketService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use drivent::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
