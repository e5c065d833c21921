//! Traits related to remote git forges
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{error::Result, forge::types::Release};

/// Lists the published releases of a repository.
///
/// Implementations perform a single logical query per call and hold no
/// mutable state, so one source can serve concurrent resolutions.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    async fn list_releases(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Vec<Release>>;
}
