use axum::extract::ws::{Message, WebSocket};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::feed::{Marker, MarkerFeed, Snapshot};

/// Encoded messages that bring `marker` up to `snapshot`.
pub fn frames(marker: &mut Marker, snapshot: &Snapshot) -> Vec<String> {
    marker
        .apply(snapshot)
        .into_iter()
        .filter_map(|message| match message.encode() {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(%err, "Could not encode feed message");
                None
            }
        })
        .collect()
}

pub async fn stream_feed(mut socket: WebSocket, mut feed: watch::Receiver<Snapshot>) {
    let mut marker = Marker::new();
    debug!("Map client connected");

    loop {
        let snapshot = feed.borrow_and_update().clone();
        for text in frames(&mut marker, &snapshot) {
            if socket.send(Message::Text(text)).await.is_err() {
                debug!("Map client went away");
                return;
            }
        }

        tokio::select! {
            changed = feed.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            incoming = socket.recv() => match incoming {
                // Client frames carry nothing for us.
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => return,
                Some(Ok(_)) => {}
            },
        }
    }

    let _ = socket.send(Message::Close(None)).await;
}

pub async fn ingest_telemetry(mut socket: WebSocket, feed: MarkerFeed) {
    debug!("Telemetry source connected");

    while let Some(frame) = socket.recv().await {
        match frame {
            Ok(Message::Text(text)) => {
                if let Err(err) = feed.ingest(&text) {
                    warn!(%err, "Dropping telemetry message");
                }
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(err) => {
                warn!(%err, "Telemetry connection lost");
                break;
            }
        }
    }

    feed.disconnect();
}
