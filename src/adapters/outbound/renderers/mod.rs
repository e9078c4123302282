mod json_renderer;
mod text_renderer;

pub use json_renderer::JsonMapRenderer;
pub use text_renderer::TextMapRenderer;
