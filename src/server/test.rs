#![cfg(test)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use approx::assert_relative_eq;
use axum::body::to_bytes;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::config::{Config, FeedMode};
use crate::feed::{FeedMessage, FeedStatus, Marker, MarkerFeed, Snapshot};
use crate::path::corridor::BAIRD_SUBDIVISION;
use crate::predict::{
    ClockTime, Day, FixedPredictor, PredictError, PredictionRequest, UniformPredictor,
};
use crate::server::error::ServerError;
use crate::server::{cors, handlers, router, simulate, socket, AppState};
use crate::sim::{Direction, TrainPosition};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

const WAIT: Duration = Duration::from_secs(5);

fn state(mode: FeedMode) -> AppState {
    AppState::new(
        Arc::new(BAIRD_SUBDIVISION.clone()),
        MarkerFeed::new(),
        UniformPredictor,
        mode,
    )
}

fn position(lng: f64) -> TrainPosition {
    TrainPosition {
        lat: 32.7,
        lng,
        direction: Direction::Eastbound,
        timestamp: Utc.with_ymd_and_hms(2024, 11, 2, 8, 30, 0).unwrap(),
    }
}

fn position_message(lng: f64) -> String {
    FeedMessage::from(position(lng))
        .encode()
        .expect("position encodes")
}

fn streamed_lng(frame: &str) -> f64 {
    match FeedMessage::decode(frame).expect("valid frame") {
        FeedMessage::TrainPosition { position } => position.lng,
        other => panic!("Expected a position, got {other:?}"),
    }
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("bound address");
    tokio::spawn(async move { axum::serve(listener, app).await });
    addr
}

async fn connect(addr: SocketAddr, route: &str) -> Client {
    let (client, _) = connect_async(format!("ws://{addr}{route}"))
        .await
        .expect("websocket upgrade");
    client
}

async fn next_message(client: &mut Client) -> Option<Message> {
    timeout(WAIT, client.next())
        .await
        .expect("frame in time")
        .and_then(Result::ok)
}

async fn next_text(client: &mut Client) -> String {
    match next_message(client).await {
        Some(Message::Text(text)) => text,
        other => panic!("Expected a text frame, got {other:?}"),
    }
}

async fn wait_for(
    updates: &mut watch::Receiver<Snapshot>,
    ready: impl FnMut(&Snapshot) -> bool,
) -> Snapshot {
    let snapshot = timeout(WAIT, updates.wait_for(ready))
        .await
        .expect("feed update in time")
        .expect("feed open");
    Snapshot::clone(&snapshot)
}

async fn error_body(err: ServerError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn request() -> PredictionRequest {
    PredictionRequest {
        day: Day::Wednesday,
        time: ClockTime::parse("07:45").expect("valid time"),
    }
}

#[test]
fn routers_build_for_both_modes() {
    let _ = router(state(FeedMode::Simulated));
    let _ = router(state(FeedMode::External)).layer(cors(["http://localhost:3000"].into_iter()));
}

#[test_log::test(tokio::test)]
async fn health_check_is_ok() {
    assert_eq!(handlers::health_check().await, StatusCode::OK);
}

#[test_log::test(tokio::test)]
async fn corridor_lists_every_waypoint() {
    let Json(view) = handlers::corridor(State(state(FeedMode::Simulated))).await;

    assert_eq!(view.waypoints.len(), BAIRD_SUBDIVISION.len());
    assert_eq!(view.waypoints[0], [32.701069, -97.635797]);
    assert!(view.wkt.starts_with("LINESTRING"));

    let [lat, lng] = view.center;
    assert!(lat < 32.701069 && lat > 32.693877, "Centre latitude {lat}");
    assert!(lng > -97.635797 && lng < -97.589203, "Centre longitude {lng}");
}

#[test_log::test(tokio::test)]
async fn position_reports_the_feed_snapshot() {
    let state = state(FeedMode::External);

    let Json(empty) = handlers::position(State(state.clone())).await;
    assert_eq!(empty, Snapshot::default());

    state
        .feed
        .ingest(r#"{"type":"train_position","position":{"lat":32.7,"lng":-97.62,"direction":"east","timestamp":"2024-11-02T08:30:00Z"}}"#)
        .expect("valid message");

    let Json(snapshot) = handlers::position(State(state)).await;
    assert_eq!(snapshot.status, FeedStatus::Live);
    assert_relative_eq!(snapshot.position.expect("ingested").lng, -97.62);
}

#[test_log::test(tokio::test)]
async fn predict_answers_in_range() {
    let response = handlers::predict(State(state(FeedMode::Simulated)), Ok(Json(request()))).await;

    let Json(prediction) = response.expect("stub always predicts");
    assert!((0.0..=1.0).contains(&prediction.probability));
    assert_eq!(prediction.time_window, "07:45 - wednesday");
}

#[test_log::test(tokio::test)]
async fn predictor_failure_is_a_generic_500() {
    let state = AppState::new(
        Arc::new(BAIRD_SUBDIVISION.clone()),
        MarkerFeed::new(),
        FixedPredictor(7.0),
        FeedMode::Simulated,
    );

    let err = handlers::predict(State(state), Ok(Json(request())))
        .await
        .expect_err("probability out of range");
    assert!(matches!(err, ServerError::Predict(PredictError::Unavailable(_))));

    let (status, body) = error_body(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to get prediction");
}

#[test_log::test(tokio::test)]
async fn malformed_requests_are_a_generic_400() {
    let (status, body) =
        error_body(ServerError::InvalidRequest("missing field `day`".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid prediction request");

    let (status, body) =
        error_body(ServerError::from(PredictError::InvalidTime("7".to_string()))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid prediction request");
}

#[test]
fn socket_frames_follow_the_marker() {
    let mut marker = Marker::new();
    let snapshot = Snapshot {
        position: Some(TrainPosition {
            lat: 32.7,
            lng: -97.62,
            direction: Direction::Westbound,
            timestamp: Utc.with_ymd_and_hms(2024, 11, 2, 8, 30, 0).unwrap(),
        }),
        status: FeedStatus::Live,
    };

    let frames = socket::frames(&mut marker, &snapshot);
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], r#"{"type":"status","status":"live"}"#);
    assert!(frames[1].starts_with(r#"{"type":"train_position","position":{"#));

    assert!(socket::frames(&mut marker, &snapshot).is_empty());
}

#[test_log::test(tokio::test(start_paused = true))]
async fn simulation_drives_the_position_live() {
    let state = state(FeedMode::Simulated);
    let config = Config::default();

    let driver = simulate(state.path.clone(), &config, &state.feed).expect("valid config");
    tokio::time::sleep(config.tick_interval).await;

    let Json(snapshot) = handlers::position(State(state)).await;
    assert_eq!(snapshot.status, FeedStatus::Live);

    let position = snapshot.position.expect("driver ticked");
    assert_eq!(position.direction, Direction::Eastbound);
    assert!(position.lng < -97.6, "Still near the western end: {}", position.lng);

    driver.stop().await;
}

#[test_log::test(tokio::test)]
async fn live_socket_streams_status_then_positions() {
    let state = state(FeedMode::Simulated);
    let feed = state.feed.clone();
    let mut client = connect(spawn(router(state)).await, "/ws").await;

    assert_eq!(
        next_text(&mut client).await,
        r#"{"type":"status","status":"no_data"}"#
    );

    feed.publish(position(-97.62));
    assert_eq!(
        next_text(&mut client).await,
        r#"{"type":"status","status":"live"}"#
    );
    assert_relative_eq!(streamed_lng(&next_text(&mut client).await), -97.62);

    // Anything the client says is ignored and the stream carries on.
    client
        .send(Message::Text("hello".into()))
        .await
        .expect("client frame sent");
    feed.publish(position(-97.61));
    assert_relative_eq!(streamed_lng(&next_text(&mut client).await), -97.61);
}

#[test_log::test(tokio::test)]
async fn live_socket_closes_when_the_feed_ends() {
    let (sender, updates) = watch::channel(Snapshot::default());
    let app = Router::new().route(
        "/ws",
        get(move |ws: WebSocketUpgrade| {
            let updates = updates.clone();
            async move { ws.on_upgrade(move |upgraded| socket::stream_feed(upgraded, updates)) }
        }),
    );
    let mut client = connect(spawn(app).await, "/ws").await;

    assert_eq!(
        next_text(&mut client).await,
        r#"{"type":"status","status":"no_data"}"#
    );

    drop(sender);
    let last = next_message(&mut client).await;
    assert!(
        matches!(last, Some(Message::Close(_)) | None),
        "Expected the stream to close, got {last:?}"
    );
}

#[test_log::test(tokio::test)]
async fn telemetry_close_keeps_the_last_position() {
    let state = state(FeedMode::External);
    let feed = state.feed.clone();
    let mut updates = feed.subscribe();
    let mut client = connect(spawn(router(state)).await, "/telemetry").await;

    client
        .send(Message::Text(r#"{"type":"heartbeat"}"#.into()))
        .await
        .expect("sent");
    client
        .send(Message::Text(position_message(-97.62)))
        .await
        .expect("sent");
    wait_for(&mut updates, |s| s.status == FeedStatus::Live).await;

    client.close(None).await.expect("closed");
    let snapshot = wait_for(&mut updates, |s| s.status == FeedStatus::NoData).await;
    let kept = snapshot.position.expect("position retained");
    assert_relative_eq!(kept.lng, -97.62);
}

#[test_log::test(tokio::test)]
async fn telemetry_connection_loss_keeps_the_last_position() {
    let state = state(FeedMode::External);
    let feed = state.feed.clone();
    let mut updates = feed.subscribe();
    let mut client = connect(spawn(router(state)).await, "/telemetry").await;

    client
        .send(Message::Text(position_message(-97.61)))
        .await
        .expect("sent");
    wait_for(&mut updates, |s| s.status == FeedStatus::Live).await;

    drop(client);
    let snapshot = wait_for(&mut updates, |s| s.status == FeedStatus::NoData).await;
    let kept = snapshot.position.expect("position retained");
    assert_relative_eq!(kept.lng, -97.61);
}

#[test_log::test(tokio::test)]
async fn telemetry_is_not_mounted_for_the_simulated_feed() {
    let addr = spawn(router(state(FeedMode::Simulated))).await;
    assert!(connect_async(format!("ws://{addr}/telemetry")).await.is_err());
}
