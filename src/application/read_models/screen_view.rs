//! Screen view - a render-ready snapshot of the radar screen

use crate::radar::domain::{Marker, ViewportRegion};
use crate::shared::RadarError;
use serde::Serialize;

/// A visible error banner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBanner {
    /// Short label, e.g. "search failed"
    pub label: String,
    /// Full message including hints
    pub message: String,
}

impl From<&RadarError> for StatusBanner {
    fn from(error: &RadarError) -> Self {
        Self {
            label: error.label().to_string(),
            message: error.to_string(),
        }
    }
}

/// Everything a renderer needs to draw the screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenView {
    /// Lifecycle name, see `ScreenState::name`
    pub state: String,
    /// `false` while unpositioned, blocked or unmounted
    pub shows_map: bool,
    pub viewport: Option<ViewportRegion>,
    pub filter: String,
    pub markers: Vec<Marker>,
    /// Whether a live-update channel is currently attached
    pub live: bool,
    pub status: Option<StatusBanner>,
}

impl ScreenView {
    pub fn developer_count(&self) -> usize {
        self.markers.len()
    }
}
