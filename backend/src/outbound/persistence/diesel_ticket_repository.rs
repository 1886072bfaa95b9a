//! PostgreSQL-backed `TicketRepository`.
//!
//! `tickets.enrollment_id` is unique and `tickets.ticket_type_id` references
//! `ticket_types`; violations of either surface as dedicated port errors.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{TicketRepository, TicketRepositoryError};
use crate::domain::{EnrollmentId, NewTicket, Ticket, TicketType};

use super::diesel_error_mapping::{
    ConstraintViolation, constraint_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{NewTicketRow, TicketRow, TicketTypeRow, ticket_from_rows};
use super::pool::{DbPool, PoolError};
use super::schema::{ticket_types, tickets};

/// Diesel implementation of the ticket catalogue and issuance port.
#[derive(Clone)]
pub struct DieselTicketRepository {
    pool: DbPool,
}

impl DieselTicketRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TicketRepositoryError {
    map_basic_pool_error(error, |message| TicketRepositoryError::connection(message))
}

fn map_diesel_error(error: diesel::result::Error) -> TicketRepositoryError {
    map_basic_diesel_error(
        error,
        |message| TicketRepositoryError::query(message),
        |message| TicketRepositoryError::connection(message),
    )
}

fn map_insert_error(error: diesel::result::Error) -> TicketRepositoryError {
    match constraint_violation(&error) {
        Some(ConstraintViolation::Unique) => TicketRepositoryError::duplicate_ticket(),
        Some(ConstraintViolation::ForeignKey) => TicketRepositoryError::unknown_ticket_type(),
        None => map_diesel_error(error),
    }
}

fn to_ticket(row: TicketRow, ticket_type: TicketTypeRow) -> Result<Ticket, TicketRepositoryError> {
    let ticket_id = row.id;
    ticket_from_rows(row, ticket_type).map_err(|error| {
        warn!(ticket_id, %error, "stored ticket has an unrecognised status");
        TicketRepositoryError::query(error.to_string())
    })
}

#[async_trait]
impl TicketRepository for DieselTicketRepository {
    async fn list_types(&self) -> Result<Vec<TicketType>, TicketRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TicketTypeRow> = ticket_types::table
            .order(ticket_types::id.asc())
            .select(TicketTypeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(TicketType::from).collect())
    }

    async fn find_by_enrollment_id(
        &self,
        enrollment_id: EnrollmentId,
    ) -> Result<Option<Ticket>, TicketRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(TicketRow, TicketTypeRow)> = tickets::table
            .inner_join(ticket_types::table)
            .filter(tickets::enrollment_id.eq(enrollment_id.get()))
            .select((TicketRow::as_select(), TicketTypeRow::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(|(ticket, ticket_type)| to_ticket(ticket, ticket_type))
            .transpose()
    }

    async fn create(&self, ticket: NewTicket) -> Result<Ticket, TicketRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewTicketRow {
            ticket_type_id: ticket.ticket_type_id.get(),
            enrollment_id: ticket.enrollment_id.get(),
            status: ticket.status.as_str(),
        };

        let row: TicketRow = diesel::insert_into(tickets::table)
            .values(&new_row)
            .returning(TicketRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_insert_error)?;

        let ticket_type: TicketTypeRow = ticket_types::table
            .find(row.ticket_type_id)
            .select(TicketTypeRow::as_select())
            .first(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        to_ticket(row, ticket_type)
    }
}
