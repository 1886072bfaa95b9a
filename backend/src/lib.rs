//! Event backend library: ticket issuance and hotel room booking.
//!
//! The crate follows a ports-and-adapters layout. [`domain`] holds the
//! entities and rule engines, [`inbound`] the actix-web adapter,
//! [`outbound`] the Diesel persistence adapters and [`middleware`] the
//! request tracing layer.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
