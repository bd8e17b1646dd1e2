//! HTTP and WebSocket surface of the service.
//!
//! | Route            | Method | Purpose                                   |
//! |------------------|--------|-------------------------------------------|
//! | `/`              | GET    | Health check                              |
//! | `/corridor`      | GET    | Corridor waypoints, centre and WKT        |
//! | `/position`      | GET    | Latest marker snapshot                    |
//! | `/ws`            | GET    | WebSocket stream of feed messages         |
//! | `/predict`       | POST   | Crossing prediction for a day and time    |
//! | `/telemetry`     | GET    | WebSocket ingest, external feed mode only |

pub mod error;
pub mod handlers;
pub mod socket;
pub mod state;

#[cfg(test)]
mod test;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::{serve as serve_app, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer, MaxAge};
use tracing::{info, warn};

use crate::config::{Config, ConfigError, FeedMode};
use crate::feed::MarkerFeed;
use crate::path::corridor::BAIRD_SUBDIVISION;
use crate::path::Path;
use crate::predict::UniformPredictor;
use crate::sim::{Driver, DriverHandle, Resolver, SimulationClock};

#[doc(inline)]
pub use error::ServerError;
#[doc(inline)]
pub use state::AppState;

pub fn cors<'a>(origins: impl Iterator<Item = &'a str>) -> CorsLayer {
    CorsLayer::new()
        .allow_methods(vec![Method::GET, Method::POST])
        .allow_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .allow_origin(AllowOrigin::list(
            origins.filter_map(|o| o.parse::<HeaderValue>().ok()),
        ))
        .max_age(MaxAge::exact(Duration::new(3600, 0)))
}

/// Builds the router. `/telemetry` is only mounted for the external feed.
pub fn router(state: AppState) -> Router {
    let app = Router::new()
        .route("/", get(handlers::health_check))
        .route("/corridor", get(handlers::corridor))
        .route("/position", get(handlers::position))
        .route("/ws", get(handlers::live))
        .route("/predict", post(handlers::predict));

    let app = match state.mode {
        FeedMode::External => app.route("/telemetry", get(handlers::telemetry)),
        FeedMode::Simulated => app,
    };

    app.with_state(state)
}

/// Runs the service until interrupted.
///
/// In simulated mode a [`Driver`] ticks the corridor resolver into the
/// marker feed for as long as the server runs, and is stopped after it.
pub async fn serve(config: Config) -> Result<(), crate::Error> {
    let path = Arc::new(BAIRD_SUBDIVISION.clone());
    let feed = MarkerFeed::new();

    let driver = match config.feed_mode {
        FeedMode::Simulated => Some(simulate(path.clone(), &config, &feed)?),
        FeedMode::External => None,
    };

    let state = AppState::new(path, feed, UniformPredictor, config.feed_mode);
    let app = router(state).layer(cors(config.origins()));

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(addr = ?listener.local_addr(), mode = %config.feed_mode, "Starting server.");

    serve_app(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(driver) = driver {
        driver.stop().await;
    }

    info!("Terminating server.");
    Ok(())
}

/// Starts a [`Driver`] that publishes the train's position along `path` into
/// `feed` on every tick.
pub fn simulate(
    path: Arc<Path>,
    config: &Config,
    feed: &MarkerFeed,
) -> Result<DriverHandle, ConfigError> {
    let clock = SimulationClock::new(Resolver::new(path, config.leg_duration));
    let driver = Driver::new(clock, config.tick_interval)?
        .attach("marker_feed", feed.observer())
        .start();

    Ok(driver)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "Could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
