use std::fmt::Display;
use std::path::Path;
use std::path::PathBuf;

/// The well-known status files a gitdotplan repository may carry at its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SupportedFile {
    /// The user's current plan.
    #[value(name = ".plan")]
    Plan,
    /// The user's current project(s).
    #[value(name = ".project")]
    Project,
    /// The user's profile.
    #[value(name = ".profile")]
    Profile,
}

impl SupportedFile {
    /// Order in which `finger` prints the files.
    pub const FINGER_ORDER: [SupportedFile; 3] = [Self::Profile, Self::Project, Self::Plan];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Plan => ".plan",
            Self::Project => ".project",
            Self::Profile => ".profile",
        }
    }

    /// Section title printed above the file contents.
    pub fn title(self) -> &'static str {
        match self {
            Self::Plan => ".plan file",
            Self::Project => "Current Project(s)",
            Self::Profile => "Profile",
        }
    }

    /// Line printed in place of the section when the file is absent.
    pub fn missing_message(self) -> &'static str {
        match self {
            Self::Plan => "No .plan",
            Self::Project => "No Current Projects",
            Self::Profile => "No profile information",
        }
    }

    pub fn path_in(self, base_dir: &Path) -> PathBuf {
        base_dir.join(self.file_name())
    }
}

impl Display for SupportedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}
