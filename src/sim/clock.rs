use std::time::Duration;

use tokio::time::Instant;

use crate::sim::{Resolver, TrainPosition};

/// Derives elapsed simulation time from the instant of the first tick.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    resolver: Resolver,
    started: Option<Instant>,
    latest: Option<TrainPosition>,
}

impl SimulationClock {
    pub fn new(resolver: Resolver) -> Self {
        SimulationClock {
            resolver,
            started: None,
            latest: None,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub fn tick(&mut self) -> TrainPosition {
        self.tick_at(Instant::now())
    }

    /// Samples the resolver at `now`. The first tick fixes the start
    /// instant, so it always resolves to the start of the path.
    pub fn tick_at(&mut self, now: Instant) -> TrainPosition {
        let started = *self.started.get_or_insert(now);
        let position = self
            .resolver
            .resolve(now.saturating_duration_since(started));

        self.latest = Some(position.clone());
        position
    }

    /// Time since the first tick, zero before it.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.started
            .map_or(Duration::ZERO, |started| now.saturating_duration_since(started))
    }

    pub fn latest(&self) -> Option<&TrainPosition> {
        self.latest.as_ref()
    }

    /// Forgets the start instant, the next tick begins a new round trip.
    pub fn reset(&mut self) {
        self.started = None;
        self.latest = None;
    }
}
