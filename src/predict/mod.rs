//! Crossing predictions for a day and time of day.

pub mod error;
pub mod predictor;
pub mod request;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use error::PredictError;
#[doc(inline)]
pub use predictor::{FixedPredictor, Predictor, UniformPredictor};
#[doc(inline)]
pub use request::{ClockTime, Day, Prediction, PredictionRequest};
