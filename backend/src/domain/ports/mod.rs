//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) describe what the domain needs from
//! persistence. Driving ports (`*Query`, `*Command`, [`Authenticator`])
//! describe what inbound adapters may ask of the domain.

mod macros;
pub(crate) use macros::define_port_error;

mod authenticator;
mod booking_command;
mod booking_query;
mod booking_repository;
mod enrollment_repository;
mod room_repository;
mod session_repository;
mod ticket_command;
mod ticket_query;
mod ticket_repository;

#[cfg(test)]
pub use authenticator::MockAuthenticator;
pub use authenticator::{Authenticator, FIXTURE_TOKEN, FIXTURE_USER_ID, FixtureAuthenticator};
#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_command::{
    BookingCommand, CreateBookingRequest, FixtureBookingCommand, UpdateBookingRequest,
};
#[cfg(test)]
pub use booking_query::MockBookingQuery;
pub use booking_query::{BookingQuery, FixtureBookingQuery};
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{BookingRepository, BookingRepositoryError};
#[cfg(test)]
pub use enrollment_repository::MockEnrollmentRepository;
pub use enrollment_repository::{EnrollmentRepository, EnrollmentRepositoryError};
#[cfg(test)]
pub use room_repository::MockRoomRepository;
pub use room_repository::{RoomRepository, RoomRepositoryError};
#[cfg(test)]
pub use session_repository::MockSessionRepository;
pub use session_repository::{SessionRepository, SessionRepositoryError};
#[cfg(test)]
pub use ticket_command::MockTicketCommand;
pub use ticket_command::{CreateTicketRequest, FixtureTicketCommand, TicketCommand};
#[cfg(test)]
pub use ticket_query::MockTicketQuery;
pub use ticket_query::{FixtureTicketQuery, TicketQuery};
#[cfg(test)]
pub use ticket_repository::MockTicketRepository;
pub use ticket_repository::{TicketRepository, TicketRepositoryError};
