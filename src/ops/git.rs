#![allow(async_fn_in_trait)]

use std::ffi::OsStr;
use std::path::Path;

use anyhow::Result;
#[cfg(test)]
use mockall::automock;
use tracing::instrument;

use super::process;
use super::process::OutputMode;

// -----------------------------------------------------------------------------
// GitOps trait

/// Operations for interacting with Git
#[cfg_attr(test, automock)]
pub trait GitOps {
    /// Clone `url` into `dest`, which must be missing or empty.
    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
    /// Start tracking `file` in the repository at `cwd`.
    async fn add(&self, file: &Path, cwd: &Path) -> Result<()>;
    /// Commit all tracked changes in the repository at `cwd`.
    async fn commit(&self, message: &str, cwd: &Path) -> Result<()>;
    /// Push the current branch to its upstream.
    async fn push(&self, cwd: &Path) -> Result<()>;
}

// -----------------------------------------------------------------------------
// RealGit

/// Real implementation that calls the git CLI
pub struct RealGit;

impl GitOps for RealGit {
    #[instrument(skip(self))]
    async fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let args = [
            OsStr::new("clone"),
            OsStr::new("--"),
            OsStr::new(url),
            dest.as_os_str(),
        ];
        process::run("git", args, OutputMode::Hidden, None).await
    }

    #[instrument(skip(self))]
    async fn add(&self, file: &Path, cwd: &Path) -> Result<()> {
        let args = [OsStr::new("add"), OsStr::new("--"), file.as_os_str()];
        process::run("git", args, OutputMode::Hidden, Some(cwd)).await
    }

    #[instrument(skip(self))]
    async fn commit(&self, message: &str, cwd: &Path) -> Result<()> {
        let message_arg = format!("-m{}", message);
        process::run(
            "git",
            ["commit", "-a", message_arg.as_str()],
            OutputMode::Hidden,
            Some(cwd),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn push(&self, cwd: &Path) -> Result<()> {
        process::run("git", ["push"], OutputMode::Hidden, Some(cwd)).await
    }
}
