//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    Authenticator, BookingCommand, BookingQuery, FixtureAuthenticator, FixtureBookingCommand,
    FixtureBookingQuery, FixtureTicketCommand, FixtureTicketQuery, TicketCommand, TicketQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub authenticator: Arc<dyn Authenticator>,
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
    pub tickets: Arc<dyn TicketCommand>,
    pub tickets_query: Arc<dyn TicketQuery>,
}

impl Default for HttpStatePorts {
    fn default() -> Self {
        Self {
            authenticator: Arc::new(FixtureAuthenticator),
            bookings: Arc::new(FixtureBookingCommand),
            bookings_query: Arc::new(FixtureBookingQuery),
            tickets: Arc::new(FixtureTicketCommand),
            tickets_query: Arc::new(FixtureTicketQuery),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub authenticator: Arc<dyn Authenticator>,
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
    pub tickets: Arc<dyn TicketCommand>,
    pub tickets_query: Arc<dyn TicketQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from the bundled ports.
    ///
    /// # Examples
    /// ```
    /// use drivent::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts::default());
    /// let _authenticator = state.authenticator.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            authenticator,
            bookings,
            bookings_query,
            tickets,
            tickets_query,
        } = ports;
        Self {
            authenticator,
            bookings,
            bookings_query,
            tickets,
            tickets_query,
        }
    }
}
