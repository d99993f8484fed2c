use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use chrono::DateTime;
use chrono::Local;
use tokio::io::AsyncRead;
use tokio::io::AsyncReadExt as _;
use tracing::debug;
use tracing::info;

use crate::App;
use crate::args::UpdateArgs;
use crate::config::MissingFilePolicy;
use crate::error::Error;
use crate::ops::editor::EditorOps;
use crate::ops::git::GitOps;
use crate::repo_url;
use crate::repo_url::Access;
use crate::supported_file::SupportedFile;

/// Where the new file contents come from.
pub enum ContentSource<R> {
    /// Read everything from a non-interactive input such as piped stdin.
    Piped(R),
    /// Open the file in the editor and take whatever it leaves on disk.
    Editor,
}

impl<G: GitOps, E: EditorOps> App<G, E> {
    /// Replace one status file in a repository and push the change.
    ///
    /// 1. Clone the repository (write-capable URL) into a staging directory.
    /// 2. With `--test-only`, push the untouched clone to prove write access
    ///    and stop.
    /// 3. Resolve the target file, applying the missing-file policy.
    /// 4. Obtain the new contents from `source`.
    /// 5. Write, commit with a timestamped message, and push.
    pub async fn cmd_update<R: AsyncRead + Unpin>(
        &self,
        args: &UpdateArgs,
        source: ContentSource<R>,
        stdout: &mut impl std::io::Write,
    ) -> Result<()> {
        let url = repo_url::normalize(&args.repo, Access::ReadWrite);
        let staging = self.clone_into_staging(&url).await?;
        let repo_dir = staging.path();

        if args.test_only {
            self.git
                .push(repo_dir)
                .await
                .with_context(|| format!("No write access to {}", url))?;
            writeln!(stdout, "Write access to {} confirmed", url)?;
            return staging.close();
        }

        let file_path = args.file.path_in(repo_dir);
        let policy = if args.create_missing {
            MissingFilePolicy::Create
        } else {
            self.config.missing_file
        };
        let created = ensure_target_file(&file_path, args.file, policy).await?;

        let contents = match source {
            ContentSource::Piped(mut reader) => {
                debug!("reading new contents from input");
                let mut contents = String::new();
                reader
                    .read_to_string(&mut contents)
                    .await
                    .context("Failed to read new contents from stdin")?;
                contents
            }
            ContentSource::Editor => {
                self.editor.edit(&file_path, repo_dir).await?;
                tokio::fs::read_to_string(&file_path)
                    .await
                    .with_context(|| format!("Failed to read {}", file_path.display()))?
            }
        };

        tokio::fs::write(&file_path, &contents)
            .await
            .with_context(|| format!("Failed to write {}", file_path.display()))?;

        if created {
            self.git.add(&file_path, repo_dir).await?;
        }
        let message = commit_message(args.file, Local::now());
        info!(%message, "committing");
        self.git.commit(&message, repo_dir).await?;
        self.git.push(repo_dir).await?;

        writeln!(stdout, "Pushed {} update to {}", args.file, url)?;
        staging.close()
    }
}

/// Make sure `path` exists according to `policy`.
///
/// Returns whether the file had to be created.
async fn ensure_target_file(
    path: &Path,
    file: SupportedFile,
    policy: MissingFilePolicy,
) -> Result<bool> {
    if tokio::fs::try_exists(path).await? {
        return Ok(false);
    }
    match policy {
        MissingFilePolicy::Fail => Err(Error::MissingFile { file }.into()),
        MissingFilePolicy::Create => {
            info!(%file, "creating missing file");
            tokio::fs::write(path, "")
                .await
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(true)
        }
    }
}

/// `"<file> file update DD/MM/YYYY HH:MM:SS"`
pub fn commit_message(file: SupportedFile, now: DateTime<Local>) -> String {
    format!("{} file update {}", file, now.format("%d/%m/%Y %H:%M:%S"))
}
