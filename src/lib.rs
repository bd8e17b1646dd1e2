#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod feed;
pub mod geo;
pub mod path;
pub mod predict;
pub mod sim;
pub mod util;

#[cfg(feature = "http_server")]
pub mod server;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use path::Path;
#[doc(inline)]
pub use sim::{Direction, Resolver, TrainPosition};
