use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    InvalidTime(String),
    InvalidDay(String),
    /// The predictor could not produce an estimate.
    Unavailable(String),
}

impl Display for PredictError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictError::InvalidTime(value) => write!(f, "time must be HH:MM, given {value:?}"),
            PredictError::InvalidDay(value) => write!(f, "unknown day {value:?}"),
            PredictError::Unavailable(reason) => write!(f, "prediction unavailable: {reason}"),
        }
    }
}

impl std::error::Error for PredictError {}
