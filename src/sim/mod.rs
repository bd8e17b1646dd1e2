//! The position simulation engine.
//!
//! A [`Resolver`] is a pure mapping from elapsed time to a [`Fix`] on a
//! [`Path`](crate::path::Path). The [`SimulationClock`] turns instants into
//! elapsed time, and the [`Driver`] ticks the clock at a fixed interval,
//! handing every [`TrainPosition`] to its registered observers.

pub mod clock;
pub mod direction;
pub mod driver;
pub mod observer;
pub mod phase;
pub mod position;
pub mod resolver;


#[doc(inline)]
pub use clock::SimulationClock;
#[doc(inline)]
pub use direction::Direction;
#[doc(inline)]
pub use driver::{Driver, DriverHandle};
#[doc(inline)]
pub use observer::{Observer, ObserverSet};
#[doc(inline)]
pub use phase::{LegDuration, Phase};
#[doc(inline)]
pub use position::{Fix, TrainPosition};
#[doc(inline)]
pub use resolver::Resolver;
