//! Repository error translation shared by the rule engines.
//!
//! `Connection` failures become `service_unavailable` (503) and `Query`
//! failures become `internal` (500). Constraint variants carry their own
//! client-facing messages.

use crate::domain::Error;
use crate::domain::ports::{EnrollmentRepositoryError, TicketRepositoryError};
use crate::domain::ticket_service::{DUPLICATE_TICKET_MESSAGE, INVALID_TICKET_TYPE_MESSAGE};

pub(crate) fn map_enrollment_error(error: EnrollmentRepositoryError) -> Error {
    match error {
        EnrollmentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("enrollment repository unavailable: {message}"))
        }
        EnrollmentRepositoryError::Query { message } => {
            Error::internal(format!("enrollment repository error: {message}"))
        }
    }
}

pub(crate) fn map_ticket_error(error: TicketRepositoryError) -> Error {
    match error {
        TicketRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("ticket repository unavailable: {message}"))
        }
        TicketRepositoryError::Query { message } => {
            Error::internal(format!("ticket repository error: {message}"))
        }
        TicketRepositoryError::UnknownTicketType => {
            Error::invalid_request(INVALID_TICKET_TYPE_MESSAGE)
        }
        TicketRepositoryError::DuplicateTicket => Error::forbidden(DUPLICATE_TICKET_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(EnrollmentRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(EnrollmentRepositoryError::query("syntax"), ErrorCode::InternalError)]
    fn enrollment_failures_map_by_kind(
        #[case] error: EnrollmentRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        assert_eq!(map_enrollment_error(error).code(), expected);
    }

    #[rstest]
    #[case(TicketRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable, None)]
    #[case(TicketRepositoryError::query("syntax"), ErrorCode::InternalError, None)]
    #[case(
        TicketRepositoryError::unknown_ticket_type(),
        ErrorCode::InvalidRequest,
        Some(INVALID_TICKET_TYPE_MESSAGE)
    )]
    #[case(
        TicketRepositoryError::duplicate_ticket(),
        ErrorCode::Forbidden,
        Some(DUPLICATE_TICKET_MESSAGE)
    )]
    fn ticket_failures_map_by_kind(
        #[case] error: TicketRepositoryError,
        #[case] expected: ErrorCode,
        #[case] message: Option<&str>,
    ) {
        let mapped = map_ticket_error(error);
        assert_eq!(mapped.code(), expected);
        if let Some(message) = message {
            assert_eq!(mapped.message(), message);
        }
    }
}
