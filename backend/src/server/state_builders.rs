//! Builds the HTTP port bundle from Diesel adapters and the rule services.

use std::sync::Arc;

use actix_web::web;

use drivent::domain::{BookingService, SessionAuthenticator, TicketService};
use drivent::inbound::http::state::{HttpState, HttpStatePorts};
use drivent::outbound::persistence::{
    DbPool, DieselBookingRepository, DieselEnrollmentRepository, DieselRoomRepository,
    DieselSessionRepository, DieselTicketRepository,
};

use super::ServerConfig;

/// Shared repository handles; each wraps a clone of the same pool.
struct Repositories {
    enrollments: Arc<DieselEnrollmentRepository>,
    tickets: Arc<DieselTicketRepository>,
    rooms: Arc<DieselRoomRepository>,
    bookings: Arc<DieselBookingRepository>,
    sessions: Arc<DieselSessionRepository>,
}

impl Repositories {
    fn new(pool: &DbPool) -> Self {
        Self {
            enrollments: Arc::new(DieselEnrollmentRepository::new(pool.clone())),
            tickets: Arc::new(DieselTicketRepository::new(pool.clone())),
            rooms: Arc::new(DieselRoomRepository::new(pool.clone())),
            bookings: Arc::new(DieselBookingRepository::new(pool.clone())),
            sessions: Arc::new(DieselSessionRepository::new(pool.clone())),
        }
    }
}

/// Wire the booking and ticket services and the bearer authenticator.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repos = Repositories::new(&config.db_pool);

    let bookings = Arc::new(BookingService::new(
        repos.enrollments.clone(),
        repos.tickets.clone(),
        repos.rooms,
        repos.bookings,
    ));
    let tickets = Arc::new(TicketService::new(repos.enrollments, repos.tickets));
    let authenticator = Arc::new(SessionAuthenticator::new(
        config.jwt_secret.clone(),
        repos.sessions,
    ));

    web::Data::new(HttpState::new(HttpStatePorts {
        authenticator,
        bookings: bookings.clone(),
        bookings_query: bookings,
        tickets: tickets.clone(),
        tickets_query: tickets,
    }))
}
