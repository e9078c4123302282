use crate::application::read_models::ScreenView;
use crate::ports::outbound::MapRenderer;
use crate::shared::Result;

/// JsonMapRenderer adapter for machine-readable screen snapshots
///
/// Emits the whole read model (viewport, markers, status) as pretty JSON.
pub struct JsonMapRenderer;

impl JsonMapRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonMapRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MapRenderer for JsonMapRenderer {
    fn render(&self, view: &ScreenView) -> Result<String> {
        let mut json = serde_json::to_string_pretty(view)?;
        json.push('\n');
        Ok(json)
    }
}
