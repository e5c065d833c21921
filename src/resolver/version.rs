//! Renders the release line of a package version.
use crate::{error::Result, resolver::OverrideOptions, version};

/// Returns `MAJOR.MINOR` for `package_version`, with `-TAG` appended when
/// the version is a pre-release (`TAG` being its first identifier).
///
/// The version must be valid semver. Only the major number can be
/// overridden here; `override_minor_version` is ignored.
pub fn resolve_release_version(
    package_version: &str,
    options: &OverrideOptions,
) -> Result<String> {
    let parsed = version::parse(package_version)?;

    let major = options.override_major_version.unwrap_or(parsed.major);

    let mut release_version = format!("{}.{}", major, parsed.minor);

    if let Some(tag) = version::first_prerelease_identifier(&parsed) {
        release_version = format!("{release_version}-{tag}");
    }

    Ok(release_version)
}
