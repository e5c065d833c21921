//! Command execution for release-link.
//!
//! - **version**: render the release line of a package version
//! - **link**: resolve the archive link of the matching forge release
//!
//! Commands return their output so `main` decides where it is printed.

/// Resolves the matching release archive link on a forge.
pub mod link;

/// Renders the `major.minor[-tag]` release line.
pub mod version;
