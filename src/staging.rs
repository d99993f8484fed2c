use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use tracing::debug;

/// Scratch directory holding a fresh clone for the duration of one command.
///
/// The directory is removed when the value is dropped, so every exit path
/// (including `?` propagation) cleans up. [`StagingDir::close`] does the same
/// but reports removal failures.
pub struct StagingDir {
    dir: tempfile::TempDir,
}

impl StagingDir {
    pub fn new(root: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("gitdotplan-");
        let dir = match root {
            Some(root) => builder
                .tempdir_in(root)
                .with_context(|| format!("Failed to create staging directory in {}", root.display()))?,
            None => builder
                .tempdir()
                .context("Failed to create staging directory")?,
        };
        debug!(path = %dir.path().display(), "created staging directory");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn close(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir
            .close()
            .with_context(|| format!("Failed to remove staging directory {}", path.display()))
    }
}
