use std::collections::BTreeMap;

use crate::sim::TrainPosition;

/// Receives every position the driver samples.
pub trait Observer: Send {
    fn observe(&mut self, position: &TrainPosition);
}

impl<F> Observer for F
where
    F: FnMut(&TrainPosition) + Send,
{
    fn observe(&mut self, position: &TrainPosition) {
        self(position)
    }
}

pub type Obs = Box<dyn Observer>;

/// Named observers, notified in name order.
#[derive(Default)]
pub struct ObserverSet {
    observers: BTreeMap<String, Obs>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `observer` under `name`, replacing any previous one.
    pub fn insert<O: Observer + 'static>(&mut self, observer: O, name: &str) -> Option<Obs> {
        self.observers.insert(name.to_string(), Box::new(observer))
    }

    pub fn detach(&mut self, name: &str) -> Option<Obs> {
        self.observers.remove(name)
    }

    pub fn notify(&mut self, position: &TrainPosition) {
        for observer in self.observers.values_mut() {
            observer.observe(position);
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.observers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn clear(&mut self) {
        self.observers.clear();
    }
}
