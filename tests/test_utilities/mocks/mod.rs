/// Mock implementations for testing
mod mock_command_source;
mod mock_developer_search;
mod mock_location_provider;
mod mock_map_renderer;
mod mock_navigator;
mod mock_progress_reporter;
mod mock_push_channel;

pub use mock_command_source::ScriptedCommandSource;
pub use mock_developer_search::MockDeveloperSearch;
pub use mock_location_provider::MockLocationProvider;
pub use mock_map_renderer::{CapturingRenderer, FailingPresenter, NullPresenter};
pub use mock_navigator::MockNavigator;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_push_channel::MockPushChannel;

use devradar::prelude::*;
use devradar::radar::domain::GeoPoint;

/// Builds a developer record at the given position
pub fn developer(id: &str, latitude: f64, longitude: f64) -> DeveloperRecord {
    DeveloperRecord {
        id: id.to_string(),
        name: Some(format!("Developer {}", id)),
        github_username: format!("dev-{}", id),
        bio: Some(format!("Bio of {}", id)),
        avatar_url: Some(format!("https://avatars.example.com/{}.png", id)),
        techs: vec!["ReactJS".to_string(), "Node.js".to_string()],
        location: GeoPoint::from_coordinate(Coordinate {
            latitude,
            longitude,
        }),
    }
}
