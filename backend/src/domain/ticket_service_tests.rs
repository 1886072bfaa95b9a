//! Tests for the ticket rule engine.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::fixtures::{enrollment, ticket, ticket_type};
use crate::domain::ports::{MockEnrollmentRepository, MockTicketRepository, TicketRepositoryError};
use crate::domain::{EnrollmentId, ErrorCode, TicketTypeId};

fn make_service(
    enrollments: MockEnrollmentRepository,
    tickets: MockTicketRepository,
) -> TicketService<MockEnrollmentRepository, MockTicketRepository> {
    TicketService::new(Arc::new(enrollments), Arc::new(tickets))
}

fn enrolled(user_id: UserId) -> MockEnrollmentRepository {
    let mut enrollments = MockEnrollmentRepository::new();
    enrollments
        .expect_find_by_user_id()
        .return_once(move |_| Ok(Some(enrollment(10, user_id))));
    enrollments
}

fn not_enrolled() -> MockEnrollmentRepository {
    let mut enrollments = MockEnrollmentRepository::new();
    enrollments
        .expect_find_by_user_id()
        .return_once(|_| Ok(None));
    enrollments
}

#[tokio::test]
async fn ticket_types_returns_full_catalogue() {
    let mut tickets = MockTicketRepository::new();
    tickets.expect_list_types().return_once(|| {
        Ok(vec![
            ticket_type(1, false, true),
            ticket_type(2, true, false),
            ticket_type(3, false, false),
        ])
    });

    let types = make_service(MockEnrollmentRepository::new(), tickets)
        .ticket_types()
        .await
        .expect("catalogue");
    let mut ids: Vec<i32> = types.iter().map(|t| t.id.get()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn ticket_types_may_be_empty() {
    let mut tickets = MockTicketRepository::new();
    tickets.expect_list_types().return_once(|| Ok(Vec::new()));

    let types = make_service(MockEnrollmentRepository::new(), tickets)
        .ticket_types()
        .await
        .expect("empty catalogue");
    assert!(types.is_empty());
}

#[tokio::test]
async fn ticket_for_unenrolled_user_is_not_found() {
    let mut tickets = MockTicketRepository::new();
    tickets.expect_find_by_enrollment_id().never();

    let err = make_service(not_enrolled(), tickets)
        .ticket_for_user(UserId::new(1))
        .await
        .expect_err("not enrolled");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn ticket_for_user_without_ticket_is_not_found() {
    let mut tickets = MockTicketRepository::new();
    tickets
        .expect_find_by_enrollment_id()
        .return_once(|_| Ok(None));

    let err = make_service(enrolled(UserId::new(1)), tickets)
        .ticket_for_user(UserId::new(1))
        .await
        .expect_err("no ticket");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn ticket_for_user_looks_up_by_enrollment() {
    let mut tickets = MockTicketRepository::new();
    tickets
        .expect_find_by_enrollment_id()
        .withf(|id| *id == EnrollmentId::new(10))
        .return_once(|id| {
            Ok(Some(ticket(
                id,
                ticket_type(2, false, true),
                TicketStatus::Paid,
            )))
        });

    let found = make_service(enrolled(UserId::new(1)), tickets)
        .ticket_for_user(UserId::new(1))
        .await
        .expect("ticket");
    assert_eq!(found.enrollment_id, EnrollmentId::new(10));
    assert_eq!(found.ticket_type.id, TicketTypeId::new(2));
}

#[rstest]
#[case(None)]
#[case(Some(TicketTypeId::new(0)))]
#[tokio::test]
async fn create_without_ticket_type_fails_before_persistence(
    #[case] ticket_type_id: Option<TicketTypeId>,
) {
    let mut enrollments = MockEnrollmentRepository::new();
    enrollments.expect_find_by_user_id().never();
    let mut tickets = MockTicketRepository::new();
    tickets.expect_create().never();

    let err = make_service(enrollments, tickets)
        .create_ticket(CreateTicketRequest {
            user_id: UserId::new(1),
            ticket_type_id,
        })
        .await
        .expect_err("invalid ticket type");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), INVALID_TICKET_TYPE_MESSAGE);
}

#[tokio::test]
async fn create_for_unenrolled_user_is_not_found() {
    let mut tickets = MockTicketRepository::new();
    tickets.expect_create().never();

    let err = make_service(not_enrolled(), tickets)
        .create_ticket(CreateTicketRequest {
            user_id: UserId::new(1),
            ticket_type_id: Some(TicketTypeId::new(2)),
        })
        .await
        .expect_err("not enrolled");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn create_reserves_ticket_for_enrollment() {
    let mut tickets = MockTicketRepository::new();
    tickets
        .expect_create()
        .withf(|new| {
            new.ticket_type_id == TicketTypeId::new(2)
                && new.enrollment_id == EnrollmentId::new(10)
                && new.status == TicketStatus::Reserved
        })
        .times(1)
        .return_once(|new| {
            Ok(ticket(
                new.enrollment_id,
                ticket_type(new.ticket_type_id.get(), false, true),
                new.status,
            ))
        });

    let created = make_service(enrolled(UserId::new(1)), tickets)
        .create_ticket(CreateTicketRequest {
            user_id: UserId::new(1),
            ticket_type_id: Some(TicketTypeId::new(2)),
        })
        .await
        .expect("ticket created");
    assert_eq!(created.status, TicketStatus::Reserved);
    assert_eq!(created.ticket_type.id, TicketTypeId::new(2));
}

#[rstest]
#[case(TicketRepositoryError::unknown_ticket_type(), ErrorCode::InvalidRequest)]
#[case(TicketRepositoryError::duplicate_ticket(), ErrorCode::Forbidden)]
#[case(TicketRepositoryError::connection("down"), ErrorCode::ServiceUnavailable)]
#[case(TicketRepositoryError::query("boom"), ErrorCode::InternalError)]
#[tokio::test]
async fn create_maps_repository_failures(
    #[case] failure: TicketRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut tickets = MockTicketRepository::new();
    tickets.expect_create().return_once(move |_| Err(failure));

    let err = make_service(enrolled(UserId::new(1)), tickets)
        .create_ticket(CreateTicketRequest {
            user_id: UserId::new(1),
            ticket_type_id: Some(TicketTypeId::new(7)),
        })
        .await
        .expect_err("repository failure");
    assert_eq!(err.code(), expected);
}
