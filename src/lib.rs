//! Resolve a package version to the matching release on a Git forge.
//!
//! The release "line" of a version is its `major.minor` pair. Given a
//! package version and an `owner/name` repository, [`ReleaseLinkResolver`]
//! lists the repository's releases through a [`ReleaseSource`], keeps those
//! on the same line and returns the archive link of the highest one.
//! [`resolve_release_version`] renders the line itself, e.g. `0.14-dev` for
//! `0.14.2-dev.1`.
pub mod error;
pub mod forge;
pub mod resolver;
pub mod version;

pub use error::{ReleaseError, Result};
pub use forge::{
    config::{ArchiveFormat, Remote, RemoteConfig},
    factory::ForgeFactory,
    traits::ReleaseSource,
    types::Release,
};
pub use resolver::{
    OverrideOptions, OverrideOptionsBuilder, ReleaseLinkResolver,
    resolve_release_version,
};

#[cfg(test)]
pub mod test_helpers;
