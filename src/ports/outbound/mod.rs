/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the radar screen uses to reach
/// geolocation, the radar server, navigation and the console.
pub mod developer_search;
pub mod location_provider;
pub mod map_renderer;
pub mod navigator;
pub mod output_presenter;
pub mod progress_reporter;
pub mod push_channel;

pub use developer_search::DeveloperSearch;
pub use location_provider::{Accuracy, LocationProvider, PermissionStatus};
pub use map_renderer::MapRenderer;
pub use navigator::{Navigator, Route};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use push_channel::{ChannelEvent, ChannelHandle, ChannelId, PushChannel};
