use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::ConfigError;
use crate::sim::{Observer, ObserverSet, SimulationClock, TrainPosition};

/// Fixed-tick scheduler around a [`SimulationClock`].
///
/// Observers are attached before [`Driver::start`]; they live inside the
/// spawned tick task and are dropped with it, so stopping the driver (or
/// dropping its [`DriverHandle`]) deregisters every one of them.
pub struct Driver {
    clock: SimulationClock,
    interval: Duration,
    observers: ObserverSet,
}

impl Driver {
    pub fn new(clock: SimulationClock, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(Driver {
            clock,
            interval,
            observers: ObserverSet::new(),
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn attach<O: Observer + 'static>(mut self, name: &str, observer: O) -> Self {
        if self.observers.insert(observer, name).is_some() {
            warn!(observer = name, "Replaced existing observer");
        }
        self
    }

    pub fn detach(&mut self, name: &str) -> bool {
        self.observers.detach(name).is_some()
    }

    pub fn observers(&self) -> &ObserverSet {
        &self.observers
    }

    /// Spawns the tick task onto the current tokio runtime.
    pub fn start(self) -> DriverHandle {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let (latest_tx, latest_rx) = watch::channel(None);

        info!(
            interval = ?self.interval,
            observers = self.observers.len(),
            "Starting simulation driver"
        );

        let task = tokio::spawn(self.run(latest_tx, shutdown_rx));

        DriverHandle {
            shutdown: Some(shutdown_tx),
            task: Some(task),
            latest: latest_rx,
        }
    }

    async fn run(
        mut self,
        latest: watch::Sender<Option<TrainPosition>>,
        mut shutdown: oneshot::Receiver<()>,
    ) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                // Resolves on an explicit stop and when the handle is dropped.
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    let position = self.clock.tick();
                    self.observers.notify(&position);
                    latest.send_replace(Some(position));
                }
            }
        }

        self.observers.clear();
        debug!("Simulation driver stopped, observers released");
    }
}

/// Controls a running [`Driver`].
pub struct DriverHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
    latest: watch::Receiver<Option<TrainPosition>>,
}

impl DriverHandle {
    /// Latest-value view of the sampled positions. Closed once the driver stops.
    pub fn subscribe(&self) -> watch::Receiver<Option<TrainPosition>> {
        self.latest.clone()
    }

    pub fn latest(&self) -> Option<TrainPosition> {
        self.latest.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stops ticking and waits until every observer has been released.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                warn!(?err, "Simulation driver did not shut down cleanly");
            }
        }
    }
}

impl Drop for DriverHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
