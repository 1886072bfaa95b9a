//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions into domain types live here so
//! each adapter stays a thin query wrapper.

use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::domain::{
    Address, Booking, BookingId, Enrollment, EnrollmentId, HotelId, Room, RoomId, Session, Ticket,
    TicketId, TicketStatus, TicketType, TicketTypeId, UnknownTicketStatus, UserId,
};

use super::schema::{addresses, bookings, enrollments, rooms, sessions, ticket_types, tickets};

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SessionRow {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Self {
            id: row.id,
            user_id: UserId::new(row.user_id),
            token: row.token,
        }
    }
}

// ---------------------------------------------------------------------------
// Enrollments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = enrollments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EnrollmentRow {
    pub id: i32,
    pub name: String,
    pub cpf: String,
    pub birthday: NaiveDate,
    pub phone: String,
    pub user_id: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = addresses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AddressRow {
    pub cep: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub number: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
}

impl From<AddressRow> for Address {
    fn from(row: AddressRow) -> Self {
        Self {
            cep: row.cep,
            street: row.street,
            city: row.city,
            state: row.state,
            number: row.number,
            neighborhood: row.neighborhood,
            address_detail: row.address_detail,
        }
    }
}

/// Combine an enrollment row with its optional address.
pub(crate) fn enrollment_from_rows(row: EnrollmentRow, address: Option<AddressRow>) -> Enrollment {
    Enrollment {
        id: EnrollmentId::new(row.id),
        user_id: UserId::new(row.user_id),
        name: row.name,
        cpf: row.cpf,
        birthday: row.birthday,
        phone: row.phone,
        address: address.map(Address::from),
    }
}

// ---------------------------------------------------------------------------
// Tickets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ticket_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TicketTypeRow {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TicketTypeRow> for TicketType {
    fn from(row: TicketTypeRow) -> Self {
        Self {
            id: TicketTypeId::new(row.id),
            name: row.name,
            price: row.price,
            is_remote: row.is_remote,
            includes_hotel: row.includes_hotel,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tickets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TicketRow {
    pub id: i32,
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tickets)]
pub(crate) struct NewTicketRow<'a> {
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
    pub status: &'a str,
}

/// Combine a ticket row with its ticket type.
///
/// Fails when the stored status is not one of the known values.
pub(crate) fn ticket_from_rows(
    row: TicketRow,
    ticket_type: TicketTypeRow,
) -> Result<Ticket, UnknownTicketStatus> {
    Ok(Ticket {
        id: TicketId::new(row.id),
        ticket_type_id: TicketTypeId::new(row.ticket_type_id),
        enrollment_id: EnrollmentId::new(row.enrollment_id),
        status: row.status.parse::<TicketStatus>()?,
        created_at: row.created_at,
        updated_at: row.updated_at,
        ticket_type: TicketType::from(ticket_type),
    })
}

// ---------------------------------------------------------------------------
// Rooms and bookings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = rooms)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RoomRow {
    pub id: i32,
    pub name: String,
    pub capacity: i32,
    pub hotel_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(row: RoomRow) -> Self {
        Self {
            id: RoomId::new(row.id),
            name: row.name,
            capacity: row.capacity,
            hotel_id: HotelId::new(row.hotel_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookingRow {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: BookingId::new(row.id),
            user_id: UserId::new(row.user_id),
            room_id: RoomId::new(row.room_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub(crate) struct NewBookingRow {
    pub user_id: i32,
    pub room_id: i32,
}

/// Changeset moving a booking onto another room.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = bookings)]
pub(crate) struct BookingRoomUpdate {
    pub room_id: i32,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ticket_type_row() -> TicketTypeRow {
        let now = Utc::now();
        TicketTypeRow {
            id: 2,
            name: "Presencial".to_owned(),
            price: 250,
            is_remote: false,
            includes_hotel: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn ticket_row(status: &str) -> TicketRow {
        let now = Utc::now();
        TicketRow {
            id: 7,
            ticket_type_id: 2,
            enrollment_id: 5,
            status: status.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    #[rstest]
    #[case("RESERVED", TicketStatus::Reserved)]
    #[case("PAID", TicketStatus::Paid)]
    fn ticket_rows_convert_with_type(#[case] raw: &str, #[case] expected: TicketStatus) {
        let ticket = ticket_from_rows(ticket_row(raw), ticket_type_row()).expect("known status");
        assert_eq!(ticket.status, expected);
        assert_eq!(ticket.enrollment_id, EnrollmentId::new(5));
        assert_eq!(ticket.ticket_type.id, TicketTypeId::new(2));
        assert!(ticket.ticket_type.includes_hotel);
    }

    #[rstest]
    fn ticket_rows_reject_unknown_status() {
        let err = ticket_from_rows(ticket_row("CANCELLED"), ticket_type_row())
            .expect_err("status is unknown");
        assert_eq!(err, UnknownTicketStatus("CANCELLED".to_owned()));
    }

    #[rstest]
    fn enrollment_rows_attach_optional_address() {
        let row = EnrollmentRow {
            id: 3,
            name: "Ana".to_owned(),
            cpf: "12345678901".to_owned(),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
            phone: "(21) 98999-9999".to_owned(),
            user_id: 9,
        };
        let without = enrollment_from_rows(row.clone(), None);
        assert_eq!(without.user_id, UserId::new(9));
        assert!(without.address.is_none());

        let address = AddressRow {
            cep: "01001-000".to_owned(),
            street: "Praça da Sé".to_owned(),
            city: "São Paulo".to_owned(),
            state: "SP".to_owned(),
            number: "1".to_owned(),
            neighborhood: "Sé".to_owned(),
            address_detail: None,
        };
        let with = enrollment_from_rows(row, Some(address));
        assert_eq!(with.address.map(|a| a.state), Some("SP".to_owned()));
    }
}
