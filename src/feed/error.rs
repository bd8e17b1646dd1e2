use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// The message was not valid feed JSON.
    Decode(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(value: serde_json::Error) -> Self {
        FeedError::Decode(value.to_string())
    }
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Decode(reason) => write!(f, "could not decode feed message: {reason}"),
        }
    }
}

impl std::error::Error for FeedError {}
