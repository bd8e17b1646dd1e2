//! Surveyed corridors the simulation can run on.

use once_cell::sync::Lazy;

use crate::geo::Degree;
use crate::path::Path;

/// UP Baird Subdivision through Aledo, TX, west to east, as `(lat, lng)`.
pub const BAIRD_SUBDIVISION_WAYPOINTS: [(Degree, Degree); 20] = [
    (32.701069, -97.635797),
    (32.700978, -97.634220),
    (32.700879, -97.631688),
    (32.700789, -97.629478),
    (32.700621, -97.626774),
    (32.700397, -97.624049),
    (32.700087, -97.621431),
    (32.699751, -97.618899),
    (32.699367, -97.616367),
    (32.698923, -97.613878),
    (32.698450, -97.611346),
    (32.697977, -97.608857),
    (32.697472, -97.606368),
    (32.696936, -97.603836),
    (32.696400, -97.601347),
    (32.695896, -97.598944),
    (32.695391, -97.596498),
    (32.694855, -97.593966),
    (32.694351, -97.591563),
    (32.693877, -97.589203),
];

/// The Baird Subdivision as a process-wide [`Path`].
pub static BAIRD_SUBDIVISION: Lazy<Path> = Lazy::new(|| {
    Path::from_degrees(&BAIRD_SUBDIVISION_WAYPOINTS)
        .expect("Baird Subdivision literal is a valid path")
});
