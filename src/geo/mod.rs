//! Geographic primitives the corridor and resolver are expressed in.

#[doc(hidden)]
pub mod coord;
#[doc(hidden)]
pub mod error;

#[doc(inline)]
pub use coord::latlng::{Degree, LatLng};
#[doc(inline)]
pub use error::GeoError;
