#![allow(async_fn_in_trait)]

use std::ffi::OsStr;
use std::path::Path;

use anyhow::Result;
use anyhow::bail;
#[cfg(test)]
use mockall::automock;
use tracing::info;

use super::process;
use super::process::OutputMode;

/// Interactive editing of a file in place.
#[cfg_attr(test, automock)]
pub trait EditorOps {
    async fn edit(&self, file: &Path, cwd: &Path) -> Result<()>;
}

/// Launches an external editor command, e.g. `nvim` or `code --wait`.
pub struct RealEditor {
    command: String,
}

impl RealEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl EditorOps for RealEditor {
    async fn edit(&self, file: &Path, cwd: &Path) -> Result<()> {
        let mut words = self.command.split_whitespace();
        let Some(program) = words.next() else {
            bail!("Editor command is empty");
        };
        let mut args: Vec<&OsStr> = words.map(OsStr::new).collect();
        args.push(file.as_os_str());

        info!(editor = %self.command, file = %file.display(), "launching editor");
        process::run(program, args, OutputMode::Visible, Some(cwd)).await
    }
}
