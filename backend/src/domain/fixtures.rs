//! Entity builders shared by the domain service tests.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::{
    Booking, BookingId, Enrollment, EnrollmentId, HotelId, Room, RoomId, RoomOccupancy, Ticket,
    TicketId, TicketStatus, TicketType, TicketTypeId, UserId,
};

fn epoch() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub fn enrollment(id: i32, user_id: UserId) -> Enrollment {
    Enrollment {
        id: EnrollmentId::new(id),
        user_id,
        name: "Ada Lovelace".to_owned(),
        cpf: "12345678909".to_owned(),
        birthday: NaiveDate::from_ymd_opt(1990, 5, 17).expect("valid date"),
        phone: "(21) 98999-9999".to_owned(),
        address: None,
    }
}

pub fn ticket_type(id: i32, is_remote: bool, includes_hotel: bool) -> TicketType {
    TicketType {
        id: TicketTypeId::new(id),
        name: format!("type-{id}"),
        price: 300,
        is_remote,
        includes_hotel,
        created_at: epoch(),
        updated_at: epoch(),
    }
}

pub fn ticket(enrollment_id: EnrollmentId, ticket_type: TicketType, status: TicketStatus) -> Ticket {
    Ticket {
        id: TicketId::new(1),
        ticket_type_id: ticket_type.id,
        enrollment_id,
        status,
        created_at: epoch(),
        updated_at: epoch(),
        ticket_type,
    }
}

/// A paid, in-person ticket that includes the hotel.
pub fn hotel_ticket(enrollment_id: EnrollmentId) -> Ticket {
    ticket(enrollment_id, ticket_type(1, false, true), TicketStatus::Paid)
}

pub fn room(id: i32, capacity: i32) -> Room {
    Room {
        id: RoomId::new(id),
        name: format!("{id}"),
        capacity,
        hotel_id: HotelId::new(1),
        created_at: epoch(),
        updated_at: epoch(),
    }
}

pub fn occupancy(room: Room, booking_count: i64) -> RoomOccupancy {
    RoomOccupancy {
        room,
        booking_count,
    }
}

pub fn booking(id: i32, user_id: UserId, room_id: RoomId) -> Booking {
    Booking {
        id: BookingId::new(id),
        user_id,
        room_id,
        created_at: epoch(),
        updated_at: epoch(),
    }
}
