//! Driving port for ticket issuance.

use async_trait::async_trait;

use crate::domain::{Error, Ticket, TicketTypeId, UserId};

/// Request to issue a ticket to the caller's enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateTicketRequest {
    pub user_id: UserId,
    /// Requested ticket type; `None` or zero is rejected as invalid data.
    pub ticket_type_id: Option<TicketTypeId>,
}

/// Use-case port for ticket issuance.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketCommand: Send + Sync {
    /// Issue a `RESERVED` ticket of the requested type.
    ///
    /// # Errors
    ///
    /// - Invalid request when the ticket type id is absent, zero or unknown.
    /// - Not-found when the caller has no enrollment.
    async fn create_ticket(&self, request: CreateTicketRequest) -> Result<Ticket, Error>;
}

/// Fixture command that rejects every request as unenrolled.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTicketCommand;

#[async_trait]
impl TicketCommand for FixtureTicketCommand {
    async fn create_ticket(&self, _request: CreateTicketRequest) -> Result<Ticket, Error> {
        Err(Error::no_result())
    }
}
