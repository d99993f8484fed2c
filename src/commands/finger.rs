use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use colored::Colorize;

use crate::App;
use crate::args::FingerArgs;
use crate::ops::git::GitOps;
use crate::repo_url;
use crate::repo_url::Access;
use crate::supported_file::SupportedFile;

impl<G: GitOps, E> App<G, E> {
    /// Print the status files of a repository.
    ///
    /// Without a specific file, every supported file is printed in
    /// [`SupportedFile::FINGER_ORDER`] under a title, or replaced by a fixed
    /// "No ..." line when absent. With a specific file, only that file's
    /// contents are printed, and nothing at all if it is absent.
    pub async fn cmd_finger(&self, args: &FingerArgs, stdout: &mut impl std::io::Write) -> Result<()> {
        let url = repo_url::normalize(&args.repo, Access::ReadOnly);
        let staging = self.clone_into_staging(&url).await?;

        match args.file {
            None => {
                for file in SupportedFile::FINGER_ORDER {
                    match read_if_exists(&file.path_in(staging.path())).await? {
                        Some(contents) => {
                            let title = file.title();
                            writeln!(stdout, "{}", title.bold())?;
                            writeln!(stdout, "{}", "-".repeat(title.len()))?;
                            writeln!(stdout, "{}", contents)?;
                            writeln!(stdout)?;
                        }
                        None => writeln!(stdout, "{}", file.missing_message())?,
                    }
                }
            }
            Some(file) => {
                if let Some(contents) = read_if_exists(&file.path_in(staging.path())).await? {
                    writeln!(stdout, "{}", contents)?;
                }
            }
        }

        staging.close()
    }
}

async fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}
