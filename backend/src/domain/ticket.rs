//! Ticket catalogue entries and issued tickets.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::{EnrollmentId, TicketId, TicketTypeId};

/// Reason a ticket does not entitle its holder to a hotel booking.
///
/// Variants are declared in the order the booking rules are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelIneligibility {
    /// Remote attendance never includes a room.
    Remote,
    /// The ticket type does not bundle a hotel stay.
    HotelNotIncluded,
    /// The ticket has not been paid yet.
    Unpaid,
}

/// Static catalogue entry describing a category of admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payment state of an issued ticket.
///
/// Tickets are issued as [`TicketStatus::Reserved`]; the payment flow moves
/// them to [`TicketStatus::Paid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    Reserved,
    Paid,
}

impl TicketStatus {
    /// Stored and serialised representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reserved => "RESERVED",
            Self::Paid => "PAID",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown ticket status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ticket status: {0}")]
pub struct UnknownTicketStatus(pub String);

impl FromStr for TicketStatus {
    type Err = UnknownTicketStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "RESERVED" => Ok(Self::Reserved),
            "PAID" => Ok(Self::Paid),
            other => Err(UnknownTicketStatus(other.to_owned())),
        }
    }
}

/// A ticket issued to an enrollment, together with its catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub ticket_type_id: TicketTypeId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ticket_type: TicketType,
}

impl Ticket {
    /// Check whether this ticket allows its holder to book a hotel room.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use drivent::domain::{
    ///     EnrollmentId, HotelIneligibility, Ticket, TicketId, TicketStatus, TicketType,
    ///     TicketTypeId,
    /// };
    ///
    /// let now = Utc::now();
    /// let ticket = Ticket {
    ///     id: TicketId::new(1),
    ///     ticket_type_id: TicketTypeId::new(1),
    ///     enrollment_id: EnrollmentId::new(1),
    ///     status: TicketStatus::Reserved,
    ///     created_at: now,
    ///     updated_at: now,
    ///     ticket_type: TicketType {
    ///         id: TicketTypeId::new(1),
    ///         name: "Presencial + Hotel".into(),
    ///         price: 600,
    ///         is_remote: false,
    ///         includes_hotel: true,
    ///         created_at: now,
    ///         updated_at: now,
    ///     },
    /// };
    /// assert_eq!(ticket.hotel_eligibility(), Err(HotelIneligibility::Unpaid));
    /// ```
    pub fn hotel_eligibility(&self) -> Result<(), HotelIneligibility> {
        if self.ticket_type.is_remote {
            return Err(HotelIneligibility::Remote);
        }
        if !self.ticket_type.includes_hotel {
            return Err(HotelIneligibility::HotelNotIncluded);
        }
        if self.status != TicketStatus::Paid {
            return Err(HotelIneligibility::Unpaid);
        }
        Ok(())
    }
}

/// Insert payload for a new ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub ticket_type_id: TicketTypeId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
}
