pub mod coordinate;
pub mod developer;
pub mod generation;
pub mod marker;
pub mod query;
pub mod screen_state;
pub mod search_filter;
pub mod viewport;

pub use coordinate::Coordinate;
pub use developer::{DeveloperList, DeveloperRecord, GeoPoint};
pub use generation::{GenerationCounter, RequestGeneration};
pub use marker::{Callout, Marker};
pub use query::{ChannelParams, SearchQuery};
pub use screen_state::ScreenState;
pub use search_filter::SearchFilter;
pub use viewport::{ViewportRegion, INITIAL_SPAN};
