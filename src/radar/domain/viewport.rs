use super::Coordinate;
use serde::{Deserialize, Serialize};

/// Span in degrees used for the first viewport after geolocation
pub const INITIAL_SPAN: f64 = 0.04;

/// The geographic region currently visible on the map
///
/// `latitude`/`longitude` are the center; the deltas are the full height
/// and width of the region in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl ViewportRegion {
    pub fn new(center: Coordinate, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_delta: latitude_delta.abs(),
            longitude_delta: longitude_delta.abs(),
        }
    }

    /// The initial region around a freshly acquired device position
    pub fn around(center: Coordinate) -> Self {
        Self::new(center, INITIAL_SPAN, INITIAL_SPAN)
    }

    pub fn center(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn min_latitude(&self) -> f64 {
        self.latitude - self.latitude_delta / 2.0
    }

    pub fn max_latitude(&self) -> f64 {
        self.latitude + self.latitude_delta / 2.0
    }

    pub fn min_longitude(&self) -> f64 {
        self.longitude - self.longitude_delta / 2.0
    }

    pub fn max_longitude(&self) -> f64 {
        self.longitude + self.longitude_delta / 2.0
    }

    /// Whether a coordinate falls inside the region (edges included)
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.latitude >= self.min_latitude()
            && coordinate.latitude <= self.max_latitude()
            && coordinate.longitude >= self.min_longitude()
            && coordinate.longitude <= self.max_longitude()
    }
}
