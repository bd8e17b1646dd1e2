use serde::{Deserialize, Serialize};

use crate::feed::error::FeedError;
use crate::sim::TrainPosition;

/// Whether the feed currently has a source of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FeedStatus {
    Live,
    #[default]
    NoData,
}

/// A message on the live position channel, tagged by `type`.
///
/// ```json
/// { "type": "train_position", "position": { "lat": 32.7, "lng": -97.6, "direction": "east", "timestamp": "2024-11-02T08:30:00Z" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedMessage {
    TrainPosition { position: TrainPosition },
    Status { status: FeedStatus },
    /// Any other message type. Consumers ignore these.
    #[serde(other)]
    Unknown,
}

impl FeedMessage {
    pub fn decode(text: &str) -> Result<Self, FeedError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn encode(&self) -> Result<String, FeedError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<TrainPosition> for FeedMessage {
    fn from(position: TrainPosition) -> Self {
        FeedMessage::TrainPosition { position }
    }
}
