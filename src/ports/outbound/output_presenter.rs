use crate::shared::Result;

/// OutputPresenter port for presenting rendered output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where a rendered map is presented.
pub trait OutputPresenter {
    /// Presents the rendered content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
