//! devradar - find developers near you by technology
//!
//! The radar screen shows developers registered near a position as map pins,
//! searches them by comma-separated technology tags and appends new matches
//! pushed by the server while the screen is open.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`radar`): Pure radar models, policies and services
//! - **Application Layer** (`application`): The screen state machine and use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use devradar::prelude::*;
//! use std::time::Duration;
//!
//! # async fn demo() -> Result<()> {
//! // Create adapters
//! let location = FixedLocationProvider::from_parts(Some(-23.55), Some(-46.63))?;
//! let search = HttpDeveloperSearch::new("http://localhost:3333", Duration::from_secs(10))?;
//! let channel = HttpPushChannel::new("http://localhost:3333", Duration::from_secs(10))?;
//!
//! // Create use case
//! let mut use_case = RunRadarUseCase::new(
//!     location,
//!     search,
//!     channel,
//!     LogNavigator::new(),
//!     StderrProgressReporter::new(),
//!     Box::new(TextMapRenderer::new(48, 16)),
//!     Box::new(StdoutPresenter::new()),
//! )
//! .with_screen(ScreenOptions::default(), SearchFilter::new("ReactJS, Node.js"));
//!
//! // Search once and print the map
//! let summary = use_case.execute_once().await?;
//! println!("{} developers", summary.developers_shown);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod radar;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::{LineCommandSource, StdinCommandSource};
    pub use crate::adapters::outbound::console::{
        FileSystemWriter, StderrProgressReporter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::location::FixedLocationProvider;
    pub use crate::adapters::outbound::navigation::LogNavigator;
    pub use crate::adapters::outbound::network::{HttpDeveloperSearch, HttpPushChannel};
    pub use crate::adapters::outbound::renderers::{JsonMapRenderer, TextMapRenderer};
    pub use crate::application::dto::{OutputFormat, ScreenOptions};
    pub use crate::application::read_models::ScreenView;
    pub use crate::application::screen::{RadarScreen, SearchOutcome};
    pub use crate::application::use_cases::{RunRadarUseCase, SessionSummary};
    pub use crate::ports::inbound::{CommandSource, UserCommand};
    pub use crate::ports::outbound::{
        ChannelEvent, ChannelHandle, DeveloperSearch, LocationProvider, MapRenderer, Navigator,
        OutputPresenter, ProgressReporter, PushChannel, Route,
    };
    pub use crate::radar::domain::{
        Coordinate, DeveloperRecord, Marker, ScreenState, SearchFilter, ViewportRegion,
    };
    pub use crate::radar::policies::StalePolicy;
    pub use crate::shared::Result;
}
