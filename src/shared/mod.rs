/// Shared kernel - error types, result alias and input safety checks
pub mod error;
pub mod result;
pub mod security;

pub use error::{ExitCode, RadarError};
pub use result::Result;
