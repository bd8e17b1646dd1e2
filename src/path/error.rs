use std::fmt::{Display, Formatter};

use crate::geo::GeoError;
use crate::impl_err;

#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// A path needs at least two waypoints to have a segment.
    TooFewWaypoints(usize),
    Geo(GeoError),
}

impl_err!(GeoError, PathError, Geo);

impl Display for PathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::TooFewWaypoints(count) => {
                write!(f, "path requires at least 2 waypoints, given {count}")
            }
            PathError::Geo(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PathError {}
