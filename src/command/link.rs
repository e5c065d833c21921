use log::*;
use release_link::{
    ForgeFactory, OverrideOptions, ReleaseLinkResolver, Remote,
};

use crate::result::Result;

/// Resolve the archive link of the release matching `package_version` in
/// `repository_path` on the configured forge.
pub async fn execute(
    remote: &Remote,
    package_version: &str,
    repository_path: &str,
    options: &OverrideOptions,
) -> Result<String> {
    let source = ForgeFactory::create(remote)?;
    let resolver = ReleaseLinkResolver::new(source);

    info!(
        "looking up release for {package_version} in {repository_path} via {}",
        remote.config().api_base_url
    );

    let link = resolver
        .resolve(package_version, repository_path, options)
        .await?;

    Ok(link)
}
