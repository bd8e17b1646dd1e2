use std::time::Duration;

use crate::config::ConfigError;
use crate::sim::Direction;

/// Duration of one one-way traversal of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LegDuration(Duration);

impl Default for LegDuration {
    fn default() -> Self {
        LegDuration::DEFAULT
    }
}

impl TryFrom<Duration> for LegDuration {
    type Error = ConfigError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        LegDuration::new(value)
    }
}

impl LegDuration {
    /// One minute per leg, two per round trip.
    pub const DEFAULT: LegDuration = LegDuration(Duration::from_millis(60_000));

    pub fn new(duration: Duration) -> Result<Self, ConfigError> {
        if duration.is_zero() {
            return Err(ConfigError::ZeroLegDuration);
        }

        Ok(LegDuration(duration))
    }

    pub fn from_millis(millis: u64) -> Result<Self, ConfigError> {
        LegDuration::new(Duration::from_millis(millis))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub fn round_trip(&self) -> Duration {
        self.0 * 2
    }
}

/// Progress through one round trip, in `[0, 2)`.
/// `[0, 1)` is the eastbound leg, `[1, 2)` the westbound leg.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Phase(f64);

impl Phase {
    pub const ROUND_TRIP: f64 = 2.0;

    /// Wraps any real into `[0, 2)`. Non-finite input maps to 0.
    pub fn new(value: f64) -> Self {
        let wrapped = value.rem_euclid(Self::ROUND_TRIP);
        match (0.0..Self::ROUND_TRIP).contains(&wrapped) {
            true => Phase(wrapped),
            false => Phase(0.0),
        }
    }

    /// Phase reached after `elapsed` with legs of `leg` each.
    ///
    /// The wrap is taken on whole nanoseconds before converting to a real,
    /// so `elapsed` and `elapsed + 2 * leg` give the same phase exactly.
    pub fn from_elapsed(elapsed: Duration, leg: LegDuration) -> Self {
        let leg_nanos = leg.duration().as_nanos();
        let within_trip = elapsed.as_nanos() % (leg_nanos * 2);

        Phase::new(within_trip as f64 / leg_nanos as f64)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// The boundary value 0 belongs to the eastbound leg.
    pub fn direction(&self) -> Direction {
        match self.0 < 1.0 {
            true => Direction::Eastbound,
            false => Direction::Westbound,
        }
    }

    /// Progress through the current leg, in `[0, 1)`.
    pub fn leg_fraction(&self) -> f64 {
        self.0 % 1.0
    }
}
