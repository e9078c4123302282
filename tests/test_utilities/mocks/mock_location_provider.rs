use async_trait::async_trait;
use devradar::ports::outbound::{Accuracy, PermissionStatus};
use devradar::prelude::*;

/// Mock LocationProvider with a fixed permission answer and position
pub struct MockLocationProvider {
    permission: PermissionStatus,
    position: Option<Coordinate>,
}

impl MockLocationProvider {
    pub fn granted(latitude: f64, longitude: f64) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            position: Some(Coordinate {
                latitude,
                longitude,
            }),
        }
    }

    pub fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            position: None,
        }
    }

    /// Permission granted, but the position read fails
    pub fn unavailable() -> Self {
        Self {
            permission: PermissionStatus::Granted,
            position: None,
        }
    }
}

#[async_trait]
impl LocationProvider for MockLocationProvider {
    async fn request_permission(&self) -> Result<PermissionStatus> {
        Ok(self.permission)
    }

    async fn current_position(&self, _accuracy: Accuracy) -> Result<Coordinate> {
        self.position
            .ok_or_else(|| anyhow::anyhow!("GPS signal lost"))
    }
}
