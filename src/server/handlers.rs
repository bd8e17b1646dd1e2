use axum::extract::rejection::JsonRejection;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use tracing::{info, Level};

use crate::feed::Snapshot;
use crate::geo::Degree;
use crate::predict::{Prediction, PredictionRequest};
use crate::server::error::ServerError;
use crate::server::socket;
use crate::server::state::AppState;

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// The corridor as a map client draws it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorridorView {
    /// `[lat, lng]` pairs, west to east.
    pub waypoints: Vec<[Degree; 2]>,
    pub center: [Degree; 2],
    pub wkt: String,
}

pub async fn corridor(State(state): State<AppState>) -> Json<CorridorView> {
    Json(CorridorView {
        waypoints: state.path.waypoints().iter().map(|w| w.slice()).collect(),
        center: state.path.center().slice(),
        wkt: state.path.wkt(),
    })
}

pub async fn position(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.feed.snapshot())
}

#[tracing::instrument(skip_all, level = Level::INFO)]
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<Prediction>, ServerError> {
    let Json(request) = payload.map_err(|err| ServerError::InvalidRequest(err.body_text()))?;
    let prediction = state.predictor.predict(&request)?;

    info!(window = %prediction.time_window, probability = prediction.probability, "Predicted");
    Ok(Json(prediction))
}

/// Streams marker updates to a map client.
pub async fn live(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let feed = state.feed.subscribe();
    ws.on_upgrade(move |upgraded| socket::stream_feed(upgraded, feed))
}

/// Accepts positions pushed by an external telemetry source.
pub async fn telemetry(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |upgraded| socket::ingest_telemetry(upgraded, state.feed))
}
