/// Console adapters - status reporting and output destinations
mod output;
mod progress_reporter;

pub use output::{FileSystemWriter, StdoutPresenter};
pub use progress_reporter::StderrProgressReporter;
