use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::path::Path;
use crate::sim::{Fix, LegDuration, Phase, TrainPosition};

/// Maps elapsed simulation time onto a position along a [`Path`].
///
/// The train runs a round trip forever: one leg from the first waypoint to
/// the last, then one leg back. Each leg spends an equal share of the leg
/// duration on every segment, regardless of the segment's length.
///
/// ```rust
/// use std::time::Duration;
/// use railcast::path::Path;
/// use railcast::sim::{Direction, LegDuration, Resolver};
///
/// let path = Path::from_degrees(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).unwrap();
/// let resolver = Resolver::new(path, LegDuration::from_millis(1000).unwrap());
///
/// let fix = resolver.locate(Duration::from_millis(250));
/// assert_eq!(fix.direction, Direction::Eastbound);
/// assert_eq!(fix.coordinate.slice(), [0.5, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    path: Arc<Path>,
    leg: LegDuration,
}

impl Resolver {
    pub fn new(path: impl Into<Arc<Path>>, leg: LegDuration) -> Self {
        Resolver {
            path: path.into(),
            leg,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn leg(&self) -> LegDuration {
        self.leg
    }

    pub fn phase(&self, elapsed: Duration) -> Phase {
        Phase::from_elapsed(elapsed, self.leg)
    }

    pub fn locate(&self, elapsed: Duration) -> Fix {
        self.locate_phase(self.phase(elapsed))
    }

    pub fn locate_phase(&self, phase: Phase) -> Fix {
        let direction = phase.direction();
        let segments = self.path.segment_count();

        // Fractional segment index, counted along the direction of travel.
        let travelled = phase.leg_fraction() * segments as f64;

        // `travelled` is below `segments` in exact arithmetic; rounding can
        // land on it, which resolves to the end of the final segment.
        let segment_index = (travelled.floor() as usize).min(segments - 1);
        let fraction = (travelled - segment_index as f64).clamp(0.0, 1.0);

        let (start, end) = self.path.segment(direction, segment_index);

        Fix {
            coordinate: start.lerp(&end, fraction),
            direction,
            phase,
            segment_index,
            fraction,
        }
    }

    /// Resolves the position at `elapsed`, stamped with the current time.
    pub fn resolve(&self, elapsed: Duration) -> TrainPosition {
        self.resolve_at(elapsed, Utc::now())
    }

    pub fn resolve_at(&self, elapsed: Duration, timestamp: DateTime<Utc>) -> TrainPosition {
        self.locate(elapsed).at(timestamp)
    }
}
