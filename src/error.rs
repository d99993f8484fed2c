//! Error kinds that callers may want to tell apart.
//!
//! Everything else travels as a plain `anyhow::Error` with context attached.

use std::process::ExitStatus;

use thiserror::Error;

use crate::supported_file::SupportedFile;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot run command {command} ({status})")]
    Subprocess { command: String, status: ExitStatus },

    #[error("{file} does not exist in gitdotplan repo")]
    MissingFile { file: SupportedFile },
}
