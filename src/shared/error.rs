use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a screen that never got a
/// position from genuine failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the screen was shown
    Success = 0,
    /// The screen stayed blocked (permission denied or no position)
    Blocked = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, network error, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Blocked => write!(f, "Blocked (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors surfaced by the radar screen and its collaborators.
///
/// Screen-level variants are kept as visible, recoverable state; they are
/// rendered as a banner instead of aborting the event loop.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RadarError {
    #[error("Location permission denied\n\n💡 Hint: Pass --lat/--lon or set latitude/longitude in devradar.config.yml")]
    PermissionDenied,

    #[error("Current location is unavailable\nDetails: {details}")]
    LocationUnavailable { details: String },

    #[error("Developer search failed\nDetails: {details}\n\n💡 Hint: Check that the radar server is reachable and press search again")]
    SearchRequestFailed { details: String },

    #[error("Live updates disconnected\nReason: {reason}\n\n💡 Hint: Search again to reconnect")]
    ChannelDisconnected { reason: String },

    #[error("Invalid coordinate: {value}\nReason: {reason}")]
    InvalidCoordinate { value: f64, reason: String },

    /// Validation error for user input
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid config file: {path}\nDetails: {details}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        details: String,
        hint: String,
    },
}

impl RadarError {
    /// Short single-line label used in status banners
    pub fn label(&self) -> &'static str {
        match self {
            RadarError::PermissionDenied => "permission denied",
            RadarError::LocationUnavailable { .. } => "location unavailable",
            RadarError::SearchRequestFailed { .. } => "search failed",
            RadarError::ChannelDisconnected { .. } => "live updates disconnected",
            RadarError::InvalidCoordinate { .. } => "invalid coordinate",
            RadarError::Validation { .. } => "invalid input",
            RadarError::ConfigError { .. } => "config error",
        }
    }

    /// Whether the error leaves the screen without a map
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            RadarError::PermissionDenied | RadarError::LocationUnavailable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::Blocked.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::Blocked), "Blocked (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_permission_denied_display() {
        let display = format!("{}", RadarError::PermissionDenied);
        assert!(display.contains("Location permission denied"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("--lat/--lon"));
    }

    #[test]
    fn test_search_request_failed_display() {
        let error = RadarError::SearchRequestFailed {
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Developer search failed"));
        assert!(display.contains("connection refused"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_channel_disconnected_display() {
        let error = RadarError::ChannelDisconnected {
            reason: "stream closed".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Live updates disconnected"));
        assert!(display.contains("stream closed"));
    }

    #[test]
    fn test_config_error_display() {
        let error = RadarError::ConfigError {
            path: PathBuf::from("/test/devradar.config.yml"),
            details: "latitude out of range".to_string(),
            hint: "Use a value between -90 and 90".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid config file"));
        assert!(display.contains("/test/devradar.config.yml"));
        assert!(display.contains("latitude out of range"));
        assert!(display.contains("between -90 and 90"));
    }

    #[test]
    fn test_blocking_errors() {
        assert!(RadarError::PermissionDenied.is_blocking());
        assert!(RadarError::LocationUnavailable {
            details: "gps off".to_string()
        }
        .is_blocking());
        assert!(!RadarError::SearchRequestFailed {
            details: "timeout".to_string()
        }
        .is_blocking());
        assert!(!RadarError::ChannelDisconnected {
            reason: "eof".to_string()
        }
        .is_blocking());
    }

    #[test]
    fn test_labels() {
        assert_eq!(RadarError::PermissionDenied.label(), "permission denied");
        assert_eq!(
            RadarError::ChannelDisconnected {
                reason: String::new()
            }
            .label(),
            "live updates disconnected"
        );
    }
}
