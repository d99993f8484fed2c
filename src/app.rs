use anyhow::Result;

use crate::config::Config;
use crate::ops::git::GitOps;
use crate::staging::StagingDir;

/// Commands that never edit (`finger`) can use `()` as the editor.
pub struct App<G: GitOps, E> {
    pub config: Config,
    pub git: G,
    pub editor: E,
}

impl<G: GitOps, E> App<G, E> {
    pub fn new(config: Config, git: G, editor: E) -> Self {
        Self {
            config,
            git,
            editor,
        }
    }

    /// Create a fresh staging directory and clone `url` into it.
    pub(crate) async fn clone_into_staging(&self, url: &str) -> Result<StagingDir> {
        let staging = StagingDir::new(self.config.staging_root.as_deref())?;
        self.git.clone_repo(url, staging.path()).await?;
        Ok(staging)
    }
}
