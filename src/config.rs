use std::path::PathBuf;

use anyhow::Result;

/// Editor used when neither git config nor the environment names one.
pub const DEFAULT_EDITOR: &str = "nvim";

/// What `update` does when the target file is absent from the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFilePolicy {
    /// Refuse to continue; guards against editing the wrong repository.
    Fail,
    /// Create the file empty and carry on.
    Create,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Editor command line, split on whitespace.
    pub editor: String,
    pub missing_file: MissingFilePolicy,
    /// Parent directory for staging clones; the system temp dir when `None`.
    pub staging_root: Option<PathBuf>,
}

impl Config {
    /// Load config from the user's git config (`gitdotplan.*` keys).
    pub fn load() -> Result<Self> {
        let editor = match git_config_get("gitdotplan.editor", None)? {
            Some(editor) => editor,
            None => Self::default_editor(),
        };

        let missing_file = match git_config_get("gitdotplan.createMissing", Some("bool"))? {
            Some(value) if value == "true" => MissingFilePolicy::Create,
            _ => MissingFilePolicy::Fail,
        };

        Ok(Self {
            editor,
            missing_file,
            staging_root: load_staging_root()?,
        })
    }

    /// Load only the keys a read-only command uses.
    ///
    /// Update-only keys (`editor`, `createMissing`) are not read, so a bad
    /// value there cannot break `finger`.
    pub fn load_read_only() -> Result<Self> {
        Ok(Self {
            editor: DEFAULT_EDITOR.to_string(),
            missing_file: MissingFilePolicy::Fail,
            staging_root: load_staging_root()?,
        })
    }

    /// Create a new config with explicit values (useful for tests)
    pub fn new(
        editor: String,
        missing_file: MissingFilePolicy,
        staging_root: Option<PathBuf>,
    ) -> Self {
        Self {
            editor,
            missing_file,
            staging_root,
        }
    }

    /// Default config for tests
    pub fn default_for_tests() -> Self {
        Self {
            editor: "false".to_string(),
            missing_file: MissingFilePolicy::Fail,
            staging_root: None,
        }
    }

    /// Editor from `$VISUAL` or `$EDITOR`, falling back to [`DEFAULT_EDITOR`].
    pub fn default_editor() -> String {
        ["VISUAL", "EDITOR"]
            .into_iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
    }
}

fn load_staging_root() -> Result<Option<PathBuf>> {
    Ok(git_config_get("gitdotplan.stagingDir", Some("path"))?.map(PathBuf::from))
}

/// Read a single git config value; `Ok(None)` when the key is unset.
fn git_config_get(key: &str, value_type: Option<&str>) -> Result<Option<String>> {
    let mut cmd = std::process::Command::new("git");
    cmd.arg("config");
    if let Some(value_type) = value_type {
        cmd.arg(format!("--type={}", value_type));
    }
    let output = cmd.args(["--get", key]).output()?;

    // Exit code 1 means the key is not set
    if output.status.code() == Some(1) {
        return Ok(None);
    }
    if !output.status.success() {
        anyhow::bail!(
            "Failed to read {} from git config: {}",
            key,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let value = String::from_utf8(output.stdout)?.trim().to_string();
    Ok(Some(value))
}
