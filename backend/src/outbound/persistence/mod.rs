//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Each adapter implements one repository port from `domain::ports` on top
//! of a shared [`DbPool`]. Diesel row structs (`models.rs`) and table
//! definitions (`schema.rs`) stay private to this module; adapters only
//! translate between rows and domain types and hold no business rules.
//!
//! # Example
//!
//! ```no_run
//! use drivent::outbound::persistence::{DbPool, DieselBookingRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), drivent::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/drivent")).await?;
//! let bookings = DieselBookingRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_booking_repository;
mod diesel_enrollment_repository;
mod diesel_error_mapping;
mod diesel_room_repository;
mod diesel_session_repository;
mod diesel_ticket_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_booking_repository::DieselBookingRepository;
pub use diesel_enrollment_repository::DieselEnrollmentRepository;
pub use diesel_room_repository::DieselRoomRepository;
pub use diesel_session_repository::DieselSessionRepository;
pub use diesel_ticket_repository::DieselTicketRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
