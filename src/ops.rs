//! Integration layers for the external programs gitdotplan drives.
//!
//! - [`process`]: Running a child process and failing on non-zero exit
//! - [`git`]: Clone, add, commit and push via the git CLI
//! - [`editor`]: Interactive editing through the user's editor
//!
//! `git` and `editor` provide trait-based abstractions with real and mock
//! implementations to support both production use and testing.

pub mod editor;
pub mod git;
pub mod process;
