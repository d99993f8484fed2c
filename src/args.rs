//! Command-line arguments for the `finger` and `update` binaries.

use clap::Parser;

use crate::supported_file::SupportedFile;

#[derive(Parser, Debug)]
#[command(name = "finger")]
#[command(about = "Print the .profile, .project and .plan files of a gitdotplan repository", long_about = None)]
pub struct FingerArgs {
    /// Repository to read: owner/repo.git, a full SSH/HTTPS URL, or any git remote
    #[arg(long)]
    pub repo: String,
    /// Print only this file, verbatim
    #[arg(short, long, value_enum)]
    pub file: Option<SupportedFile>,
}

#[derive(Parser, Debug)]
#[command(name = "update")]
#[command(about = "Edit a file in a gitdotplan repository, then commit and push it", long_about = None)]
pub struct UpdateArgs {
    /// Repository to update: owner/repo.git, a full SSH/HTTPS URL, or any git remote
    #[arg(long)]
    pub repo: String,
    /// File to edit
    #[arg(short, long, value_enum, default_value_t = SupportedFile::Plan)]
    pub file: SupportedFile,
    /// Only check that we can push to the repository
    #[arg(long)]
    pub test_only: bool,
    /// Create the file if the repository does not have it yet
    #[arg(long)]
    pub create_missing: bool,
    /// Editor command to use instead of the configured one
    #[arg(long)]
    pub editor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finger_repo_only() {
        let args = FingerArgs::parse_from(["finger", "--repo", "alice/dotplan.git"]);
        assert_eq!(args.repo, "alice/dotplan.git");
        assert_eq!(args.file, None);
    }

    #[test]
    fn test_finger_specific_file() {
        let args = FingerArgs::parse_from(["finger", "--repo", "r", "-f", ".project"]);
        assert_eq!(args.file, Some(SupportedFile::Project));
    }

    #[test]
    fn test_finger_requires_repo() {
        assert!(FingerArgs::try_parse_from(["finger"]).is_err());
    }

    #[test]
    fn test_finger_rejects_unknown_file() {
        let result = FingerArgs::try_parse_from(["finger", "--repo", "r", "--file", ".bashrc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_defaults() {
        let args = UpdateArgs::parse_from(["update", "--repo", "alice/dotplan.git"]);
        assert_eq!(args.file, SupportedFile::Plan);
        assert!(!args.test_only);
        assert!(!args.create_missing);
        assert_eq!(args.editor, None);
    }

    #[test]
    fn test_update_all_flags() {
        let args = UpdateArgs::parse_from([
            "update",
            "--repo",
            "r",
            "--file",
            ".profile",
            "--test-only",
            "--create-missing",
            "--editor",
            "vim -u NONE",
        ]);
        assert_eq!(args.file, SupportedFile::Profile);
        assert!(args.test_only);
        assert!(args.create_missing);
        assert_eq!(args.editor.as_deref(), Some("vim -u NONE"));
    }
}
