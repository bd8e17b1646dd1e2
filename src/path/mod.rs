//! The fixed corridor a train travels along.
//!
//! A [`Path`] is an ordered, immutable sequence of at least two waypoints.
//! Traversal in either [`Direction`] goes through the same accessors,
//! [`Path::waypoint`] and [`Path::segment`], so the eastbound and westbound
//! legs can never disagree on which two waypoints bound a segment.

pub mod corridor;
pub mod error;


use geo::{BoundingRect, LineString};
use log::debug;
use wkt::ToWkt;

use crate::geo::{Degree, LatLng};
use crate::sim::Direction;

#[doc(inline)]
pub use error::PathError;

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    waypoints: Vec<LatLng>,
}

impl TryFrom<Vec<LatLng>> for Path {
    type Error = PathError;

    fn try_from(waypoints: Vec<LatLng>) -> Result<Self, Self::Error> {
        Path::new(waypoints)
    }
}

impl Path {
    pub fn new(waypoints: Vec<LatLng>) -> Result<Self, PathError> {
        if waypoints.len() < 2 {
            return Err(PathError::TooFewWaypoints(waypoints.len()));
        }

        debug!("Constructed path of {} waypoints", waypoints.len());
        Ok(Path { waypoints })
    }

    /// Builds a path from `(lat, lng)` pairs, validating each coordinate.
    pub fn from_degrees(pairs: &[(Degree, Degree)]) -> Result<Self, PathError> {
        let waypoints = pairs
            .iter()
            .map(|(lat, lng)| LatLng::from_degree(*lat, *lng))
            .collect::<Result<Vec<_>, _>>()?;

        Path::new(waypoints)
    }

    /// Number of waypoints, always at least 2.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// A valid path is never empty, present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of segments, `len() - 1`.
    pub fn segment_count(&self) -> usize {
        self.waypoints.len() - 1
    }

    pub fn waypoints(&self) -> &[LatLng] {
        &self.waypoints
    }

    pub fn first(&self) -> LatLng {
        self.waypoints[0]
    }

    pub fn last(&self) -> LatLng {
        self.waypoints[self.segment_count()]
    }

    /// The `index`-th waypoint counted along the direction of travel.
    /// Out of range indices saturate to the final waypoint.
    pub fn waypoint(&self, direction: Direction, index: usize) -> LatLng {
        let index = index.min(self.segment_count());
        match direction {
            Direction::Eastbound => self.waypoints[index],
            Direction::Westbound => self.waypoints[self.segment_count() - index],
        }
    }

    /// The endpoints `(start, end)` of the `index`-th segment in the
    /// direction of travel. The index is clamped to the last segment.
    pub fn segment(&self, direction: Direction, index: usize) -> (LatLng, LatLng) {
        let index = index.min(self.segment_count() - 1);
        (
            self.waypoint(direction, index),
            self.waypoint(direction, index + 1),
        )
    }

    /// Iterates every waypoint in the order a train heading in
    /// `direction` would pass them.
    pub fn traverse(&self, direction: Direction) -> impl Iterator<Item = LatLng> + '_ {
        (0..self.len()).map(move |index| self.waypoint(direction, index))
    }

    pub fn line_string(&self) -> LineString {
        self.waypoints
            .iter()
            .map(|waypoint| geo::Coord::from(*waypoint))
            .collect::<LineString>()
    }

    pub fn wkt(&self) -> String {
        self.line_string().wkt_string()
    }

    /// Centre of the path's bounding rectangle, used to frame a map view.
    pub fn center(&self) -> LatLng {
        match self.line_string().bounding_rect() {
            Some(rect) => LatLng::from(rect.center()),
            None => self.first(),
        }
    }
}
