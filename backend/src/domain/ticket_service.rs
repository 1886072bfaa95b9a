//! Ticket rule engine.
//!
//! Serves the ticket type catalogue, looks up the caller's ticket and issues
//! new tickets in the `RESERVED` state.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    CreateTicketRequest, EnrollmentRepository, TicketCommand, TicketQuery, TicketRepository,
};
use crate::domain::repository_errors::{map_enrollment_error, map_ticket_error};
use crate::domain::{Enrollment, Error, NewTicket, Ticket, TicketStatus, TicketType, UserId};

/// Invalid-data message for a missing or unknown ticket type.
pub const INVALID_TICKET_TYPE_MESSAGE: &str = "ticketTypeId must be valid!";
/// Forbidden message for a second ticket on the same enrollment.
pub const DUPLICATE_TICKET_MESSAGE: &str = "Enrollment already has a ticket";

/// Ticket service implementing the ticket driving ports.
#[derive(Clone)]
pub struct TicketService<E, T> {
    enrollments: Arc<E>,
    tickets: Arc<T>,
}

impl<E, T> TicketService<E, T> {
    /// Create a new service with the given repositories.
    pub fn new(enrollments: Arc<E>, tickets: Arc<T>) -> Self {
        Self {
            enrollments,
            tickets,
        }
    }
}

impl<E, T> TicketService<E, T>
where
    E: EnrollmentRepository,
    T: TicketRepository,
{
    async fn enrollment_for(&self, user_id: UserId) -> Result<Enrollment, Error> {
        self.enrollments
            .find_by_user_id(user_id)
            .await
            .map_err(map_enrollment_error)?
            .ok_or_else(|| {
                debug!(%user_id, "ticket request rejected: user not enrolled");
                Error::no_result()
            })
    }
}

#[async_trait]
impl<E, T> TicketQuery for TicketService<E, T>
where
    E: EnrollmentRepository,
    T: TicketRepository,
{
    async fn ticket_types(&self) -> Result<Vec<TicketType>, Error> {
        self.tickets
            .list_types()
            .await
            .map_err(map_ticket_error)
    }

    async fn ticket_for_user(&self, user_id: UserId) -> Result<Ticket, Error> {
        let enrollment = self.enrollment_for(user_id).await?;
        self.tickets
            .find_by_enrollment_id(enrollment.id)
            .await
            .map_err(map_ticket_error)?
            .ok_or_else(Error::no_result)
    }
}

#[async_trait]
impl<E, T> TicketCommand for TicketService<E, T>
where
    E: EnrollmentRepository,
    T: TicketRepository,
{
    async fn create_ticket(&self, request: CreateTicketRequest) -> Result<Ticket, Error> {
        let CreateTicketRequest {
            user_id,
            ticket_type_id,
        } = request;
        let Some(ticket_type_id) = ticket_type_id.filter(|id| id.get() != 0) else {
            debug!(%user_id, "ticket request rejected: missing ticket type");
            return Err(Error::invalid_request(INVALID_TICKET_TYPE_MESSAGE));
        };

        let enrollment = self.enrollment_for(user_id).await?;
        let ticket = self
            .tickets
            .create(NewTicket {
                ticket_type_id,
                enrollment_id: enrollment.id,
                status: TicketStatus::Reserved,
            })
            .await
            .map_err(map_ticket_error)?;
        info!(
            ticket_id = %ticket.id,
            %ticket_type_id,
            enrollment_id = %enrollment.id,
            "ticket reserved"
        );
        Ok(ticket)
    }
}

#[cfg(test)]
#[path = "ticket_service_tests.rs"]
mod tests;
