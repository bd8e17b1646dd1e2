use rand::Rng;

use crate::predict::error::PredictError;
use crate::predict::{Prediction, PredictionRequest};

/// Estimates the chance of a train being present in a time window.
pub trait Predictor: Send + Sync {
    fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PredictError>;
}

/// Placeholder until a forecasting model exists: a uniform draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformPredictor;

impl Predictor for UniformPredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PredictError> {
        Ok(Prediction {
            probability: rand::thread_rng().gen_range(0.0..1.0),
            time_window: request.time_window(),
        })
    }
}

/// Always answers with the same probability.
#[derive(Debug, Clone, Copy)]
pub struct FixedPredictor(pub f64);

impl Predictor for FixedPredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PredictError> {
        if !(0.0..=1.0).contains(&self.0) {
            return Err(PredictError::Unavailable(format!(
                "probability {} outside [0, 1]",
                self.0
            )));
        }

        Ok(Prediction {
            probability: self.0,
            time_window: request.time_window(),
        })
    }
}
