use super::{Coordinate, DeveloperRecord};
use serde::Serialize;

/// Popup content shown for a pin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Callout {
    pub name: String,
    pub bio: String,
    pub techs_line: String,
    pub github_username: String,
}

/// One pin on the map, derived from a developer record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub developer_id: String,
    pub coordinate: Coordinate,
    pub avatar_url: Option<String>,
    pub callout: Callout,
}

impl From<&DeveloperRecord> for Marker {
    fn from(dev: &DeveloperRecord) -> Self {
        Self {
            developer_id: dev.id.clone(),
            coordinate: dev.coordinate(),
            avatar_url: dev.avatar_url.clone(),
            callout: Callout {
                name: dev.display_name().to_string(),
                bio: dev.bio.clone().unwrap_or_default(),
                techs_line: dev.techs.join(", "),
                github_username: dev.github_username.clone(),
            },
        }
    }
}
