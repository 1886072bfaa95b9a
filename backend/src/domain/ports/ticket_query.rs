//! Driving port for ticket catalogue and ticket lookups.

use async_trait::async_trait;

use crate::domain::{Error, Ticket, TicketType, UserId};

/// Use-case port for ticket reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketQuery: Send + Sync {
    /// List the ticket type catalogue.
    async fn ticket_types(&self) -> Result<Vec<TicketType>, Error>;

    /// Fetch the ticket issued to the caller's enrollment.
    ///
    /// # Errors
    ///
    /// Not-found when the caller has no enrollment or no ticket.
    async fn ticket_for_user(&self, user_id: UserId) -> Result<Ticket, Error>;
}

/// Fixture query with an empty catalogue and no tickets.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTicketQuery;

#[async_trait]
impl TicketQuery for FixtureTicketQuery {
    async fn ticket_types(&self) -> Result<Vec<TicketType>, Error> {
        Ok(Vec::new())
    }

    async fn ticket_for_user(&self, _user_id: UserId) -> Result<Ticket, Error> {
        Err(Error::no_result())
    }
}
