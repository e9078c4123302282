use crate::ports::outbound::OutputPresenter;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing screen snapshots to a file
///
/// Each presentation overwrites the file, so it always holds the latest
/// rendering.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Rejects a missing parent directory or a symlinked target
    fn validate_target(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                anyhow::bail!(
                    "Failed to write to file: {}\nDetails: Parent directory does not exist: {}",
                    self.output_path.display(),
                    parent.display()
                );
            }
        }

        if self.output_path.exists() {
            validate_not_symlink(&self.output_path, "write")?;
        }

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_target()?;

        fs::write(&self.output_path, content).map_err(|e| {
            anyhow::anyhow!(
                "Failed to write to file: {}\nDetails: {}",
                self.output_path.display(),
                e
            )
        })?;
        Ok(())
    }
}

/// StdoutPresenter adapter for drawing the screen on stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
