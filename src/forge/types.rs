use serde::Deserialize;

use crate::forge::config::ArchiveFormat;

/// A published release as reported by a forge, normalized across platforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Tag the release points at, loosely version-formatted (e.g. "v1.2.3").
    pub tag_name: String,
    /// Download URL of the release's source archive.
    pub archive_url: String,
}

impl Release {
    pub fn new(
        tag_name: impl Into<String>,
        archive_url: impl Into<String>,
    ) -> Self {
        Self {
            tag_name: tag_name.into(),
            archive_url: archive_url.into(),
        }
    }
}

/// Release payload shared by the GitHub and Gitea REST APIs.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseResponse {
    pub tag_name: String,
    pub tarball_url: Option<String>,
    pub zipball_url: Option<String>,
}

impl ReleaseResponse {
    /// Normalizes into a [`Release`] linking the requested archive. Returns
    /// `None` when the forge reported no URL for that archive.
    pub fn into_release(self, format: ArchiveFormat) -> Option<Release> {
        let archive_url = match format {
            ArchiveFormat::Tarball => self.tarball_url,
            ArchiveFormat::Zipball => self.zipball_url,
        }?;

        if archive_url.is_empty() {
            return None;
        }

        Some(Release {
            tag_name: self.tag_name,
            archive_url,
        })
    }
}
