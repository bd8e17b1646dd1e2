use std::fmt::{Display, Formatter};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{event, Level};

use crate::impl_err;
use crate::predict::PredictError;

#[derive(Debug)]
pub enum ServerError {
    /// The request body could not be read as the expected JSON.
    InvalidRequest(String),
    Predict(PredictError),
}

impl_err!(PredictError, ServerError, Predict);

impl Display for ServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::InvalidRequest(reason) => write!(f, "invalid request: {reason}"),
            ServerError::Predict(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ServerError {}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Predict(PredictError::InvalidDay(_) | PredictError::InvalidTime(_)) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Predict(PredictError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        event!(Level::ERROR, error = %self);

        let code = self.status();
        let message = match code {
            StatusCode::INTERNAL_SERVER_ERROR => "Failed to get prediction",
            _ => "Invalid prediction request",
        };

        (code, Json(json!({ "error": message }))).into_response()
    }
}
