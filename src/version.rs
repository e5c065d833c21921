//! Semantic version helpers shared by the release resolvers.
//!
//! Package versions are parsed strictly when a full version is required and
//! coerced loosely when only the `major.minor.patch` triple matters. Release
//! tags on forges are rarely strict semver (`v1.2`, `release-1.2.3`), so
//! coercion picks the first numeric triple out of the string.
use regex::Regex;
use semver::{BuildMetadata, Comparator, Op, Prerelease, Version};
use std::{cmp::Ordering, fmt, sync::LazyLock};

use crate::error::{ReleaseError, Result};

static COERCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:^|[^\d])(\d{1,16})(?:\.(\d{1,16}))?(?:\.(\d{1,16}))?(?:$|[^\d])",
    )
    .expect("coerce pattern is valid")
});

/// Parses a full semantic version. Surrounding whitespace and a single
/// leading `v` are accepted, nothing else is forgiven.
pub fn parse(input: &str) -> Result<Version> {
    let trimmed = input.trim();
    let stripped = trimmed.strip_prefix('v').unwrap_or(trimmed);

    Version::parse(stripped)
        .map_err(|err| ReleaseError::invalid_version(format!("{input}: {err}")))
}

/// Extracts the first `major[.minor[.patch]]` run of digits from `input`.
///
/// Missing minor or patch numbers become `0`. Pre-release and build metadata
/// are dropped, so the returned version always compares as a plain release.
pub fn coerce(input: &str) -> Option<Version> {
    let captures = COERCE_RE.captures(input)?;

    let segment = |index: usize| -> Option<u64> {
        match captures.get(index) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    Some(Version::new(segment(1)?, segment(2)?, segment(3)?))
}

/// Like [`coerce`] but reports failure as [`ReleaseError::InvalidVersion`].
pub fn coerce_required(input: &str) -> Result<Version> {
    coerce(input).ok_or_else(|| {
        ReleaseError::invalid_version(format!(
            "{input}: no version could be coerced"
        ))
    })
}

/// First dot-separated identifier of the pre-release, e.g. `dev` for
/// `1.2.3-dev.4`.
pub fn first_prerelease_identifier(version: &Version) -> Option<&str> {
    if version.pre.is_empty() {
        return None;
    }

    version.pre.as_str().split('.').next()
}

/// Version used to rank a release tag. Strict tags keep their pre-release
/// for ordering, anything else falls back to its coerced triple.
pub fn tag_precedence(tag: &str) -> Option<Version> {
    parse(tag).ok().or_else(|| coerce(tag))
}

/// Orders two versions by semver precedence, ignoring build metadata.
pub fn compare_precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(
        b.major, b.minor, b.patch, &b.pre,
    ))
}

/// A `major.minor` release line. Any patch within the line matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinorLine {
    pub major: u64,
    pub minor: u64,
}

impl MinorLine {
    pub fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    fn comparator(&self) -> Comparator {
        Comparator {
            op: Op::Exact,
            major: self.major,
            minor: Some(self.minor),
            patch: None,
            pre: Prerelease::EMPTY,
        }
    }

    /// Checks the plain `major.minor.patch` of `version` against the line.
    /// Pre-release and build metadata of `version` are not considered.
    pub fn matches(&self, version: &Version) -> bool {
        let plain = Version {
            pre: Prerelease::EMPTY,
            build: BuildMetadata::EMPTY,
            ..version.clone()
        };

        self.comparator().matches(&plain)
    }
}

impl fmt::Display for MinorLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
