use std::sync::Arc;

use crate::config::FeedMode;
use crate::feed::MarkerFeed;
use crate::path::Path;
use crate::predict::Predictor;

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub path: Arc<Path>,
    pub feed: MarkerFeed,
    pub predictor: Arc<dyn Predictor>,
    pub mode: FeedMode,
}

impl AppState {
    pub fn new<P: Predictor + 'static>(
        path: Arc<Path>,
        feed: MarkerFeed,
        predictor: P,
        mode: FeedMode,
    ) -> Self {
        AppState {
            path,
            feed,
            predictor: Arc::new(predictor),
            mode,
        }
    }
}
