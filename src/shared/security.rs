use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum config file size (1 MB)
///
/// A radar config holds a handful of scalar keys; anything larger is
/// rejected before it is read into memory.
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum length of a technology filter sent to the server
pub const MAX_FILTER_LENGTH: usize = 512;

/// Maximum length of a single live-update message line (1 MB)
pub const MAX_PUSH_LINE_LENGTH: usize = 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is checked, not the
/// target it points to.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a config path is a regular, reasonably sized file
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than [`MAX_CONFIG_FILE_SIZE`]
pub fn validate_config_file(path: &Path) -> Result<()> {
    validate_not_symlink(path, "config read")?;
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.display(), e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_CONFIG_FILE_SIZE
        );
    }

    Ok(())
}

/// Validates a technology filter before it is placed in a request URL
///
/// The filter is forwarded verbatim, so only its size and control
/// characters are checked.
pub fn validate_filter_text(text: &str) -> Result<()> {
    if text.len() > MAX_FILTER_LENGTH {
        anyhow::bail!(
            "Technology filter is too long ({} bytes). Maximum allowed: {} bytes",
            text.len(),
            MAX_FILTER_LENGTH
        );
    }

    if text.chars().any(|c| c.is_control()) {
        anyhow::bail!("Technology filter contains control characters");
    }

    Ok(())
}
