//! Resolution of package versions to forge release lines and archives.
//!
//! [`version::resolve_release_version`] renders the `major.minor[-tag]` line
//! of a package version. [`link::ReleaseLinkResolver`] finds the newest
//! release on a forge that belongs to the same line and returns its archive
//! link.
use derive_builder::Builder;

pub mod link;
pub mod version;

pub use link::ReleaseLinkResolver;
pub use version::resolve_release_version;

/// Optional replacements for the version segments derived from the package
/// version. `Some(0)` is a real override, only `None` means "derive".
///
/// The minor override only affects release link resolution; rendering a
/// release version always keeps the package's own minor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct OverrideOptions {
    /// Replaces the package's major version.
    pub override_major_version: Option<u64>,
    /// Replaces the package's minor version when matching releases.
    pub override_minor_version: Option<u64>,
}
