use crate::feed::{FeedMessage, FeedStatus, Snapshot};
use crate::sim::TrainPosition;

/// What a map client is currently showing.
///
/// Applying the same snapshot twice yields nothing the second time, so a
/// consumer can apply every update it sees without redrawing needlessly.
#[derive(Debug, Clone, Default)]
pub struct Marker {
    shown: Option<TrainPosition>,
    status: Option<FeedStatus>,
}

impl Marker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Option<&TrainPosition> {
        self.shown.as_ref()
    }

    /// Returns the messages needed to bring the client up to `snapshot`.
    pub fn apply(&mut self, snapshot: &Snapshot) -> Vec<FeedMessage> {
        let mut messages = Vec::new();

        if self.status != Some(snapshot.status) {
            self.status = Some(snapshot.status);
            messages.push(FeedMessage::Status {
                status: snapshot.status,
            });
        }

        // A missing position keeps the marker where it was drawn last.
        if let Some(position) = &snapshot.position {
            if self.shown.as_ref() != Some(position) {
                self.shown = Some(position.clone());
                messages.push(FeedMessage::from(position.clone()));
            }
        }

        messages
    }
}
