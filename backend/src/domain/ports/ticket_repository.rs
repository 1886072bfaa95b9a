//! Port for ticket catalogue and issued ticket persistence.

use async_trait::async_trait;

use crate::domain::{EnrollmentId, NewTicket, Ticket, TicketType};

use super::define_port_error;

define_port_error! {
    /// Errors raised by ticket repository adapters.
    pub enum TicketRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "ticket repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "ticket repository query failed: {message}",
        /// The referenced ticket type does not exist.
        UnknownTicketType => "referenced ticket type does not exist",
        /// The enrollment already holds a ticket.
        DuplicateTicket => "enrollment already holds a ticket",
    }
}

/// Persistence for the ticket catalogue and issued tickets.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// List every ticket type in the catalogue.
    async fn list_types(&self) -> Result<Vec<TicketType>, TicketRepositoryError>;

    /// Fetch the ticket issued to an enrollment, with its ticket type.
    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, TicketRepositoryError>;

    /// Insert a ticket and return it with its ticket type populated.
    ///
    /// # Errors
    ///
    /// - [`TicketRepositoryError::UnknownTicketType`] when the ticket type id
    ///   references no catalogue entry.
    /// - [`TicketRepositoryError::DuplicateTicket`] when the enrollment
    ///   already holds a ticket.
    async fn create(&self, ticket: NewTicket) -> Result<Ticket, TicketRepositoryError>;
}
