//! Turn a user-supplied repository reference into a git remote URL.
//!
//! Accepted forms:
//!
//! - `owner/repo.git`: expanded to a GitHub SSH or HTTPS URL depending on the
//!   access required.
//! - `git@host:owner/repo.git` and `https://[www.]host/owner/repo.git`: used
//!   as-is.
//! - Anything not ending in `.git` (a local path, a bare host): used as-is.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

pub const SSH_URL_PREFIX: &str = "git@github.com:";
pub const HTTPS_URL_PREFIX: &str = "https://github.com/";

static REPO_EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.git$").expect("valid regex"));
static SSH_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^git@[\w.-]+:[\w.-]+/[\w.-]+\.git$").expect("valid regex")
});
static HTTPS_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(www\.)?[\w.-]+/[\w.-]+/[\w.-]+\.git$").expect("valid regex")
});

/// The kind of access the caller needs on the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    /// Pushing needs SSH credentials.
    ReadWrite,
}

pub fn normalize(reference: &str, access: Access) -> String {
    if !REPO_EXTENSION_RE.is_match(reference) {
        debug!(reference, "no repository extension, using reference as-is");
        return reference.to_string();
    }

    if SSH_URL_RE.is_match(reference) || HTTPS_URL_RE.is_match(reference) {
        return reference.to_string();
    }

    let prefix = match access {
        Access::ReadWrite => SSH_URL_PREFIX,
        Access::ReadOnly => HTTPS_URL_PREFIX,
    };
    format!("{}{}", prefix, reference)
}
