//! The live marker feed.
//!
//! A [`MarkerFeed`] holds the latest [`Snapshot`] of the train marker and
//! fans it out to any number of subscribers. It is filled either by the
//! simulation driver (through [`MarkerFeed::observer`]) or by an external
//! telemetry source pushing [`FeedMessage`]s (through [`MarkerFeed::ingest`]),
//! never both in one deployment.

pub mod error;
pub mod marker;
pub mod message;


use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::sim::{Observer, TrainPosition};

#[doc(inline)]
pub use error::FeedError;
#[doc(inline)]
pub use marker::Marker;
#[doc(inline)]
pub use message::{FeedMessage, FeedStatus};

/// Latest known state of the marker.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Snapshot {
    pub position: Option<TrainPosition>,
    pub status: FeedStatus,
}

#[derive(Debug, Clone)]
pub struct MarkerFeed {
    sender: Arc<watch::Sender<Snapshot>>,
}

impl Default for MarkerFeed {
    fn default() -> Self {
        let (sender, _) = watch::channel(Snapshot::default());
        MarkerFeed {
            sender: Arc::new(sender),
        }
    }
}

impl MarkerFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.sender.subscribe()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sender.borrow().clone()
    }

    /// Marks the feed live at `position`.
    pub fn publish(&self, position: TrainPosition) {
        self.sender.send_modify(|snapshot| {
            snapshot.position = Some(position);
            snapshot.status = FeedStatus::Live;
        });
    }

    /// An observer that publishes every driver tick into this feed.
    pub fn observer(&self) -> impl Observer + 'static {
        let feed = self.clone();
        move |position: &TrainPosition| feed.publish(position.clone())
    }

    /// Applies one externally pushed message.
    ///
    /// Returns whether the message moved the marker; messages of other
    /// types are ignored. Malformed input leaves the snapshot untouched.
    pub fn ingest(&self, text: &str) -> Result<bool, FeedError> {
        match FeedMessage::decode(text)? {
            FeedMessage::TrainPosition { position } => {
                self.publish(position);
                Ok(true)
            }
            other => {
                debug!(?other, "Ignoring feed message");
                Ok(false)
            }
        }
    }

    /// The source went away. The last position stays on the map.
    pub fn disconnect(&self) {
        info!("Feed source disconnected, retaining last position");
        self.sender.send_modify(|snapshot| snapshot.status = FeedStatus::NoData);
    }
}
