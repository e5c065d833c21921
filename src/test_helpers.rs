//! Common test helper functions shared across test modules.
//!
//! This module provides reusable fixtures for remote configuration and mock
//! release sources.
use url::Url;

use crate::forge::{
    config::{ArchiveFormat, RemoteConfig},
    traits::MockReleaseSource,
    types::Release,
};

/// Creates a test RemoteConfig pointing at `api_base_url` with no token.
///
/// # Example
/// ```ignore
/// let config = create_test_remote_config("https://api.github.com/");
/// ```
pub fn create_test_remote_config(api_base_url: &str) -> RemoteConfig {
    RemoteConfig {
        api_base_url: Url::parse(api_base_url).unwrap(),
        token: None,
        archive_format: ArchiveFormat::Tarball,
    }
}

/// Builds releases from `(tag, archive_url)` pairs.
pub fn releases(items: &[(&str, &str)]) -> Vec<Release> {
    items
        .iter()
        .map(|(tag, url)| Release::new(*tag, *url))
        .collect()
}

/// Creates a MockReleaseSource that answers every listing with `items`.
pub fn mock_source_with(items: Vec<Release>) -> MockReleaseSource {
    let mut source = MockReleaseSource::new();
    source
        .expect_list_releases()
        .returning(move |_, _| Ok(items.clone()));
    source
}
