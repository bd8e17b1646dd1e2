use std::fmt::{Debug, Formatter};

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::geo::error::GeoError;

pub type Degree = f64;

/// `LatLng`
/// The latitude, longitude pair structure, a single waypoint of a corridor.
///
/// ```rust
/// use railcast::geo::LatLng;
/// let latlng = LatLng::from_degree(32.701069, -97.635797).unwrap();
/// println!("Position: {:?}", latlng);
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: Degree,
    pub lng: Degree,
}

impl From<LatLng> for Coord {
    fn from(value: LatLng) -> Self {
        Coord {
            x: value.lng,
            y: value.lat,
        }
    }
}

impl From<Coord> for LatLng {
    fn from(value: Coord) -> Self {
        Self::from_degree_unchecked(value.y, value.x)
    }
}

impl LatLng {
    pub fn from_degree(lat: Degree, lng: Degree) -> Result<Self, GeoError> {
        if !(lat > -90f64 && lat < 90f64) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Latitude must be greater than -90 and less than 90. Given: {}",
                lat
            )));
        }

        if !(lng < 180f64 && lng > -180f64) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Longitude must be greater than -180 and less than 180. Given: {}",
                lng
            )));
        }

        Ok(Self::from_degree_unchecked(lat, lng))
    }

    pub fn from_degree_unchecked(lat: Degree, lng: Degree) -> Self {
        LatLng { lat, lng }
    }

    /// Returns a [`lat`, `lng`] pair, the order map clients draw in.
    pub fn slice(&self) -> [Degree; 2] {
        [self.lat, self.lng]
    }

    /// Linear interpolation towards `other`, each axis independently.
    /// A `fraction` of 0 is `self`, 1 is `other`.
    pub fn lerp(&self, other: &LatLng, fraction: f64) -> LatLng {
        LatLng {
            lat: self.lat + (other.lat - self.lat) * fraction,
            lng: self.lng + (other.lng - self.lng) * fraction,
        }
    }
}

impl Debug for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {})", self.lng, self.lat)
    }
}
