//! Implements the ReleaseSource trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;
use serde::Serialize;

use crate::{
    error::Result,
    forge::{
        config::{GITHUB_PAGE_SIZE, RemoteConfig},
        traits::ReleaseSource,
        types::{Release, ReleaseResponse},
    },
};

#[derive(Debug, Serialize)]
struct ListReleasesParams {
    per_page: u8,
    page: u32,
}

/// GitHub release source using Octocrab for API interactions.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with optional personal access token
    /// authentication and API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let mut builder =
            Octocrab::builder().base_uri(config.api_base_url.as_str())?;

        if let Some(token) = config.token.clone() {
            builder = builder.personal_token(token);
        }

        let instance = builder.build()?;

        Ok(Self { config, instance })
    }
}

#[async_trait]
impl ReleaseSource for Github {
    async fn list_releases(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Vec<Release>> {
        let endpoint = self.config.releases_url(owner, name);
        let mut releases = vec![];
        let mut page = 1;

        loop {
            debug!("listing github releases: {endpoint} page {page}");

            let params = ListReleasesParams {
                per_page: GITHUB_PAGE_SIZE,
                page,
            };

            let batch: Vec<ReleaseResponse> =
                self.instance.get(endpoint.as_str(), Some(&params)).await?;

            if batch.is_empty() {
                break;
            }

            for response in batch {
                let tag = response.tag_name.clone();
                match response.into_release(self.config.archive_format) {
                    Some(release) => releases.push(release),
                    None => debug!("release {tag} has no archive url"),
                }
            }

            page += 1;
        }

        info!("found {} releases for {owner}/{name}", releases.len());

        Ok(releases)
    }
}
