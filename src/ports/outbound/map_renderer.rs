use crate::application::read_models::ScreenView;
use crate::shared::Result;

/// MapRenderer port for drawing the radar screen
///
/// Renderers work from the read model only; they never touch the screen.
pub trait MapRenderer {
    /// Renders a snapshot of the screen
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn render(&self, view: &ScreenView) -> Result<String>;
}
