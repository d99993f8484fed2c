//! The two user-facing commands, implemented as methods on [`crate::App`].

pub mod finger;
pub mod update;

pub use update::ContentSource;
