use log::*;
use release_link::{OverrideOptions, resolve_release_version};

use crate::result::Result;

/// Resolve the release line for `package_version`.
pub fn execute(
    package_version: &str,
    options: &OverrideOptions,
) -> Result<String> {
    debug!("resolving release version for {package_version}: {options:?}");
    let release_version = resolve_release_version(package_version, options)?;
    Ok(release_version)
}
