//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod auth;
pub mod booking;
pub mod dto;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod tickets;
pub mod validation;

pub use error::ApiResult;

/// Register the booking and ticket routes together with the JSON extractor
/// configuration they rely on.
///
/// The caller supplies [`state::HttpState`] as `web::Data`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use drivent::inbound::http::configure_api;
/// use drivent::inbound::http::state::{HttpState, HttpStatePorts};
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::new(HttpStatePorts::default())))
///     .configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(validation::json_config())
        .service(booking::get_booking)
        .service(booking::create_booking)
        .service(booking::update_booking)
        .service(tickets::list_ticket_types)
        .service(tickets::get_ticket)
        .service(tickets::create_ticket);
}
