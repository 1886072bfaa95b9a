//! Graceful shutdown: fail liveness, then drain in-flight requests.
//!
//! Actix's built-in signal handling is disabled in [`super::create_server`]
//! so that `/health/live` reports 503 before the listener closes.

use std::future::Future;

use actix_web::dev::ServerHandle;
use actix_web::web;
use tracing::{info, warn};

use drivent::inbound::http::health::HealthState;

/// Resolve on SIGINT or SIGTERM.
#[cfg(unix)]
pub async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

/// Resolve on Ctrl-C.
#[cfg(not(unix))]
pub async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

/// Wait for `signal`, mark the service unhealthy and stop the server.
///
/// A failing signal listener is logged and leaves the server running.
pub async fn drain_on<F>(signal: F, health_state: web::Data<HealthState>, handle: ServerHandle)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(error) = signal.await {
        warn!(%error, "shutdown signal listener failed");
        return;
    }
    info!("shutdown requested, draining connections");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpServer};

    #[actix_web::test]
    async fn drain_marks_unhealthy_and_stops_server() {
        let server = HttpServer::new(App::new)
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .expect("bind ephemeral port")
            .run();
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);
        let health_state = web::Data::new(HealthState::new());

        drain_on(async { Ok(()) }, health_state.clone(), handle).await;

        assert!(!health_state.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }

    #[actix_web::test]
    async fn failed_listener_keeps_service_live() {
        let server = HttpServer::new(App::new)
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .expect("bind ephemeral port")
            .run();
        let handle = server.handle();
        let running = actix_web::rt::spawn(server);
        let health_state = web::Data::new(HealthState::new());

        drain_on(
            async { Err(std::io::Error::other("no signal support")) },
            health_state.clone(),
            handle.clone(),
        )
        .await;

        assert!(health_state.is_alive());
        handle.stop(false).await;
        running
            .await
            .expect("server task joins")
            .expect("server stops cleanly");
    }
}
