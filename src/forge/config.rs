//! Configuration for Git forge platform connections.
use secrecy::SecretString;
use url::Url;

/// Web address used when no GitHub base URL is configured.
pub const DEFAULT_GITHUB_BASE_URL: &str = "https://github.com";
/// Page size for GitHub release listing (API maximum).
pub const GITHUB_PAGE_SIZE: u8 = 100;
/// Requested page size for Gitea release listing. Servers clamp it to
/// their own `MAX_RESPONSE_ITEMS`.
pub const GITEA_PAGE_SIZE: u8 = 50;

/// Which source archive of a release to link to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArchiveFormat {
    /// `.tar.gz` source archive.
    #[default]
    Tarball,
    /// `.zip` source archive.
    Zipball,
}

/// Remote forge connection configuration for listing releases.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// REST API root, always ending in a slash
    /// (e.g. "https://api.github.com/", "https://gitea.example/api/v1/").
    pub api_base_url: Url,
    /// Optional access token. Public repositories can be listed without one.
    pub token: Option<SecretString>,
    /// Archive flavour reported as a release's download link.
    pub archive_format: ArchiveFormat,
}

impl RemoteConfig {
    /// Endpoint listing releases of `owner/name` under the API root.
    pub fn releases_url(&self, owner: &str, name: &str) -> Url {
        let mut url = self.api_base_url.clone();
        // owner and name are pushed as single, percent-encoded segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["repos", owner, name, "releases"]);
        }
        url
    }
}

#[derive(Debug, Clone)]
/// Supported Git forge platforms.
pub enum Remote {
    Github(RemoteConfig),
    Gitea(RemoteConfig),
}

impl Remote {
    pub fn config(&self) -> &RemoteConfig {
        match self {
            Remote::Github(config) => config,
            Remote::Gitea(config) => config,
        }
    }
}
