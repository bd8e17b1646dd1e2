use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Direction of travel along the corridor.
/// Eastbound runs from the first waypoint to the last.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    strum::Display,
)]
pub enum Direction {
    #[serde(rename = "east")]
    #[strum(serialize = "east")]
    Eastbound,
    #[serde(rename = "west")]
    #[strum(serialize = "west")]
    Westbound,
}

impl Direction {
    pub fn is_eastbound(&self) -> bool {
        matches!(self, Direction::Eastbound)
    }

    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Eastbound => Direction::Westbound,
            Direction::Westbound => Direction::Eastbound,
        }
    }
}
