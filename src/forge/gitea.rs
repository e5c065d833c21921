//! Implements the ReleaseSource trait for Gitea
use async_trait::async_trait;
use log::*;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::{
    error::Result,
    forge::{
        config::{GITEA_PAGE_SIZE, RemoteConfig},
        traits::ReleaseSource,
        types::{Release, ReleaseResponse},
    },
};

/// Gitea release source using reqwest for API interactions. Also works
/// against Forgejo, which serves the same API.
pub struct Gitea {
    config: RemoteConfig,
    client: Client,
}

impl Gitea {
    /// Create Gitea client with optional token authentication for
    /// self-hosted instances.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.token {
            let token_value = HeaderValue::from_str(
                format!("token {}", token.expose_secret()).as_str(),
            )?;
            headers.append("Authorization", token_value);
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { config, client })
    }
}

/// Reads the `X-Total-Count` header Gitea attaches to paginated listings.
fn total_count(headers: &HeaderMap) -> Option<usize> {
    headers
        .get("x-total-count")?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

#[async_trait]
impl ReleaseSource for Gitea {
    async fn list_releases(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Vec<Release>> {
        let endpoint = self.config.releases_url(owner, name);
        let page_limit = GITEA_PAGE_SIZE.to_string();
        let mut releases = vec![];
        let mut listed = 0;
        let mut page = 1;

        loop {
            debug!("listing gitea releases: {endpoint} page {page}");

            let request = self
                .client
                .get(endpoint.clone())
                .query(&[
                    ("page", page.to_string().as_str()),
                    ("limit", page_limit.as_str()),
                ])
                .build()?;
            let response = self.client.execute(request).await?;
            let result = response.error_for_status()?;
            let total = total_count(result.headers());
            let batch: Vec<ReleaseResponse> = result.json().await?;

            // servers clamp `limit` to their own maximum, so a short page
            // does not mean the listing is exhausted
            if batch.is_empty() {
                break;
            }

            listed += batch.len();

            for response in batch {
                let tag = response.tag_name.clone();
                match response.into_release(self.config.archive_format) {
                    Some(release) => releases.push(release),
                    None => debug!("release {tag} has no archive url"),
                }
            }

            if total.is_some_and(|total| listed >= total) {
                break;
            }

            page += 1;
        }

        info!("found {} releases for {owner}/{name}", releases.len());

        Ok(releases)
    }
}
