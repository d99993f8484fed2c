#![allow(dead_code)]

use std::path::Path;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

/// Run git in `dir`, failing the test on a non-zero exit.
pub async fn git(dir: &Path, args: &[&str]) -> anyhow::Result<()> {
    let status = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await?;
    anyhow::ensure!(status.success(), "git {} failed", args.join(" "));
    Ok(())
}

/// Run git in `dir` and return its trimmed stdout.
pub async fn git_output(dir: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .await?;
    anyhow::ensure!(output.status.success(), "git {} failed", args.join(" "));
    Ok(String::from_utf8(output.stdout)?.trim_end().to_string())
}

/// Creates a git repository in the given directory.
///
/// The directory should already exist.
pub async fn create_git_repo(dir: &Path) -> anyhow::Result<()> {
    git(dir, &["init"]).await?;
    git(dir, &["config", "user.name", "Test User"]).await?;
    git(dir, &["config", "user.email", "test@example.com"]).await?;
    Ok(())
}

/// Creates a bare repository at `root/remote` holding one commit with `files`.
///
/// With no files the remote is left empty (no commits at all). The name has
/// no `.git` suffix so it is used verbatim as the remote URL.
pub async fn create_remote(root: &Path, files: &[(&str, &str)]) -> anyhow::Result<PathBuf> {
    let remote = root.join("remote");
    if files.is_empty() {
        tokio::fs::create_dir_all(&remote).await?;
        git(&remote, &["init", "--bare"]).await?;
        return Ok(remote);
    }

    let work = root.join("seed");
    tokio::fs::create_dir_all(&work).await?;
    create_git_repo(&work).await?;
    for (name, contents) in files {
        tokio::fs::write(work.join(name), contents).await?;
        git(&work, &["add", *name]).await?;
    }
    git(&work, &["commit", "-m", "Seed"]).await?;

    git(root, &["clone", "--bare", "seed", "remote"]).await?;
    Ok(remote)
}

/// Number of commits reachable from HEAD in a bare repository.
pub async fn commit_count(remote: &Path) -> anyhow::Result<usize> {
    Ok(git_output(remote, &["rev-list", "--count", "HEAD"]).await?.parse()?)
}

pub fn setup_test_env() {
    // Commits made by the tools need an identity, and the user's own git
    // config (signing, hooks) must not leak into the tests.
    // SAFETY: runs from a ctor before any test thread starts.
    unsafe {
        std::env::set_var("GIT_CONFIG_GLOBAL", "/dev/null");
        std::env::set_var("GIT_CONFIG_NOSYSTEM", "1");
        std::env::set_var("GIT_AUTHOR_NAME", "Test User");
        std::env::set_var("GIT_AUTHOR_EMAIL", "test@example.com");
        std::env::set_var("GIT_COMMITTER_NAME", "Test User");
        std::env::set_var("GIT_COMMITTER_EMAIL", "test@example.com");
    }
}

pub enum TestDir {
    Temp(tempfile::TempDir),
    Kept(std::path::PathBuf),
}

impl TestDir {
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = tempfile::tempdir()?;

        if std::env::var("DEBUG_TESTS").is_ok() {
            let path = temp_dir.keep();
            eprintln!("Test directory kept at: {}", path.display());
            Ok(TestDir::Kept(path))
        } else {
            Ok(TestDir::Temp(temp_dir))
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            TestDir::Temp(t) => t.path(),
            TestDir::Kept(p) => p.as_path(),
        }
    }

    /// An empty directory under the test dir to hold staging clones.
    pub fn staging_root(&self) -> std::io::Result<PathBuf> {
        let root = self.path().join("staging");
        std::fs::create_dir_all(&root)?;
        Ok(root)
    }
}

/// Whether `dir` has no entries left.
pub fn is_empty_dir(dir: &Path) -> bool {
    std::fs::read_dir(dir).map(|mut d| d.next().is_none()).unwrap_or(false)
}

/// Write a global git config file with `[gitdotplan]` entries and return its path.
///
/// Point `GIT_CONFIG_GLOBAL` at it when running the binaries.
pub fn write_gitdotplan_config(dir: &Path, entries: &[(&str, &str)]) -> std::io::Result<PathBuf> {
    let path = dir.join("gitconfig");
    let mut contents = String::from("[gitdotplan]\n");
    for (key, value) in entries {
        contents.push_str(&format!("\t{} = {}\n", key, value));
    }
    std::fs::write(&path, contents)?;
    Ok(path)
}
