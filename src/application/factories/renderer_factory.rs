use crate::adapters::outbound::renderers::{JsonMapRenderer, TextMapRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::MapRenderer;

/// Default character-grid size for the text map
pub const DEFAULT_MAP_WIDTH: usize = 48;
pub const DEFAULT_MAP_HEIGHT: usize = 16;

/// Factory for creating map renderers
///
/// This factory encapsulates the creation logic for different renderer implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer for the specified output format
    ///
    /// `width`/`height` size the text grid and are ignored for JSON.
    ///
    /// # Examples
    /// ```
    /// use devradar::application::dto::OutputFormat;
    /// use devradar::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(OutputFormat::Text, 40, 12);
    /// ```
    pub fn create(format: OutputFormat, width: usize, height: usize) -> Box<dyn MapRenderer> {
        match format {
            OutputFormat::Text => Box::new(TextMapRenderer::new(width, height)),
            OutputFormat::Json => Box::new(JsonMapRenderer::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ScreenView;

    fn blocked_view() -> ScreenView {
        ScreenView {
            state: "blocked".to_string(),
            shows_map: false,
            viewport: None,
            filter: String::new(),
            markers: vec![],
            live: false,
            status: None,
        }
    }

    #[test]
    fn test_create_text_renderer() {
        let renderer = RendererFactory::create(OutputFormat::Text, 20, 5);
        let output = renderer.render(&blocked_view()).unwrap();
        assert!(!output.trim_start().starts_with('{'));
    }

    #[test]
    fn test_create_json_renderer() {
        let renderer = RendererFactory::create(OutputFormat::Json, 20, 5);
        let output = renderer.render(&blocked_view()).unwrap();
        assert!(output.trim_start().starts_with('{'));
    }
}
