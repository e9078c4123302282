use crate::ports::outbound::{Accuracy, LocationProvider, PermissionStatus};
use crate::radar::domain::Coordinate;
use crate::shared::{RadarError, Result};
use async_trait::async_trait;

/// FixedLocationProvider adapter for terminals without a GPS
///
/// The position comes from `--lat/--lon` or the config file. When none was
/// configured the permission request is denied, which is how a headless
/// session reports "no location available".
pub struct FixedLocationProvider {
    position: Option<Coordinate>,
}

impl FixedLocationProvider {
    pub fn new(position: Option<Coordinate>) -> Self {
        Self { position }
    }

    /// Builds a provider from optional raw latitude/longitude values
    ///
    /// Both values must be present for a position to be set.
    ///
    /// # Errors
    /// Returns an error if only one value is given or a value is out of range
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Result<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Ok(Self::new(Some(Coordinate::new(lat, lon)?))),
            (None, None) => Ok(Self::new(None)),
            _ => Err(RadarError::Validation {
                message: "latitude and longitude must be given together".to_string(),
            }
            .into()),
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn request_permission(&self) -> Result<PermissionStatus> {
        Ok(match self.position {
            Some(_) => PermissionStatus::Granted,
            None => PermissionStatus::Denied,
        })
    }

    async fn current_position(&self, _accuracy: Accuracy) -> Result<Coordinate> {
        self.position.ok_or_else(|| {
            RadarError::LocationUnavailable {
                details: "no position configured".to_string(),
            }
            .into()
        })
    }
}
