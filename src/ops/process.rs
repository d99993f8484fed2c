use std::ffi::OsStr;
use std::path::Path;
use std::process::Stdio;

use anyhow::Context;
use anyhow::Result;
use tokio::process::Command;
use tracing::debug;
use tracing::instrument;

use crate::error::Error;

/// Whether a child process may write to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Child stdout and stderr go to /dev/null.
    Hidden,
    /// Child inherits our stdio (needed for interactive editors).
    Visible,
}

/// Run `program` with `args` to completion, optionally inside `cwd`.
///
/// Fails with [`Error::Subprocess`] when the child exits non-zero.
#[instrument(skip_all, fields(command))]
pub async fn run<I, S>(program: &str, args: I, output: OutputMode, cwd: Option<&Path>) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<_> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();
    let command = display_command(program, &args);
    tracing::Span::current().record("command", command.as_str());

    let mut cmd = Command::new(program);
    cmd.args(&args);
    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }
    if output == OutputMode::Hidden {
        cmd.stdout(Stdio::null()).stderr(Stdio::null());
    }

    debug!("spawning child process");
    let status = cmd
        .status()
        .await
        .with_context(|| format!("Failed to execute {}", program))?;
    debug!(exit_code = ?status.code(), "command finished");

    if !status.success() {
        return Err(Error::Subprocess { command, status }.into());
    }

    Ok(())
}

fn display_command(program: &str, args: &[std::ffi::OsString]) -> String {
    std::iter::once(program.into())
        .chain(args.iter().map(|a| a.to_string_lossy()))
        .collect::<Vec<_>>()
        .join(" ")
}
