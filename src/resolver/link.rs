//! Finds the release archive matching a package's `major.minor` line.
use log::*;

use crate::{
    error::{ReleaseError, Result},
    forge::{traits::ReleaseSource, types::Release},
    resolver::OverrideOptions,
    version::{self, MinorLine},
};

/// Resolves release download links against a single release source.
///
/// Built once from a source and reused for any number of resolutions. Each
/// call issues exactly one listing request and keeps nothing between calls.
pub struct ReleaseLinkResolver {
    source: Box<dyn ReleaseSource>,
}

impl ReleaseLinkResolver {
    pub fn new(source: Box<dyn ReleaseSource>) -> Self {
        Self { source }
    }

    /// Returns the archive URL of the highest release in `repository_path`
    /// ("owner/name") sharing the package version's `major.minor` line.
    ///
    /// Fails with [`ReleaseError::InvalidVersion`] before any request when
    /// no version can be coerced from `package_version`, and with
    /// [`ReleaseError::NoMatchingRelease`] when nothing in the listing
    /// belongs to the line.
    pub async fn resolve(
        &self,
        package_version: &str,
        repository_path: &str,
        options: &OverrideOptions,
    ) -> Result<String> {
        let (owner, name) = split_repository_path(repository_path);

        let line = target_line(package_version, options)?;

        debug!("resolving {repository_path} release for line {line}");

        let releases = self.source.list_releases(owner, name).await?;

        let release = select_release(&releases, line).ok_or_else(|| {
            ReleaseError::no_matching_release(package_version, repository_path)
        })?;

        info!(
            "matched release {} for version {package_version}",
            release.tag_name
        );

        Ok(release.archive_url.clone())
    }
}

/// Splits "owner/name" on `/`. Missing parts come back empty and extra
/// parts are ignored; the forge decides what an odd path means.
fn split_repository_path(repository_path: &str) -> (&str, &str) {
    let mut parts = repository_path.split('/');
    let owner = parts.next().unwrap_or_default();
    let name = parts.next().unwrap_or_default();
    (owner, name)
}

fn target_line(
    package_version: &str,
    options: &OverrideOptions,
) -> Result<MinorLine> {
    let coerced = version::coerce_required(package_version)?;

    Ok(MinorLine::new(
        options.override_major_version.unwrap_or(coerced.major),
        options.override_minor_version.unwrap_or(coerced.minor),
    ))
}

/// Picks the release with the highest tag precedence within `line`.
///
/// Ranking works on a local copy; among equal precedence the earliest
/// listed release wins.
fn select_release(releases: &[Release], line: MinorLine) -> Option<&Release> {
    let mut candidates = releases
        .iter()
        .filter_map(|release| {
            let Some(coerced) = version::coerce(&release.tag_name) else {
                debug!(
                    "skipping release with unparseable tag: {}",
                    release.tag_name
                );
                return None;
            };

            if !line.matches(&coerced) {
                return None;
            }

            let precedence =
                version::tag_precedence(&release.tag_name).unwrap_or(coerced);

            Some((precedence, release))
        })
        .collect::<Vec<_>>();

    candidates.sort_by(|(a, _), (b, _)| version::compare_precedence(b, a));

    candidates.into_iter().next().map(|(_, release)| release)
}
