//! Event enrollment of a user.
//!
//! Enrollments are created by the registration flow, which lives outside
//! this service. Ticket issuance and hotel booking only read them.

use chrono::NaiveDate;

use crate::domain::{EnrollmentId, UserId};

/// A user's registration for the event.
///
/// A user owns at most one enrollment. It must exist before the user can be
/// issued a ticket or book a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub cpf: String,
    pub birthday: NaiveDate,
    pub phone: String,
    pub address: Option<Address>,
}

/// Postal address attached to an enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub cep: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub number: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
}
