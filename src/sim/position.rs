use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::{Degree, LatLng};
use crate::sim::{Direction, Phase};

/// A sampled train position, as sent to map clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainPosition {
    pub lat: Degree,
    pub lng: Degree,
    pub direction: Direction,
    pub timestamp: DateTime<Utc>,
}

impl TrainPosition {
    pub fn coordinate(&self) -> LatLng {
        LatLng::from_degree_unchecked(self.lat, self.lng)
    }
}

/// The time-independent part of a resolved position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub coordinate: LatLng,
    pub direction: Direction,
    pub phase: Phase,
    /// Index of the segment being traversed, counted along the
    /// direction of travel.
    pub segment_index: usize,
    /// Interpolation fraction within the segment.
    pub fraction: f64,
}

impl Fix {
    pub fn at(&self, timestamp: DateTime<Utc>) -> TrainPosition {
        TrainPosition {
            lat: self.coordinate.lat,
            lng: self.coordinate.lng,
            direction: self.direction,
            timestamp,
        }
    }
}
