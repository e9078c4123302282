use crate::radar::domain::Coordinate;
use crate::shared::Result;
use async_trait::async_trait;

/// Outcome of a location permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Accuracy requested for a position read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    High,
    Balanced,
}

/// LocationProvider port for device geolocation
///
/// The screen asks for permission once and then reads a single position;
/// there is no continuous location stream.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Requests permission to read the device location
    async fn request_permission(&self) -> Result<PermissionStatus>;

    /// Reads the current position once
    ///
    /// # Errors
    /// Returns an error if no position can be determined
    async fn current_position(&self, accuracy: Accuracy) -> Result<Coordinate>;
}
