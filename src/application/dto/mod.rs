/// Data Transfer Objects for application layer
///
/// DTOs carry settings between the CLI and the radar use case, keeping
/// the domain layer isolated from command-line concerns.
mod output_format;
mod screen_options;

pub use output_format::OutputFormat;
pub use screen_options::ScreenOptions;
