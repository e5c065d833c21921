//! Error types for release resolution.

use thiserror::Error;

/// Main error type for release-link operations.
#[derive(Error, Debug)]
pub enum ReleaseError {
    // Version errors
    #[error("Invalid version format: {0}")]
    InvalidVersion(String),

    // Forge errors
    #[error("Release listing failed: {0}")]
    ReleaseListing(String),

    #[error(
        "No matching releases found for version {package_version} in {repository_path}"
    )]
    NoMatchingRelease {
        package_version: String,
        repository_path: String,
    },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias using ReleaseError
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an invalid version error for the given input
    pub fn invalid_version(version: impl Into<String>) -> Self {
        Self::InvalidVersion(version.into())
    }

    /// Create a release listing error with context
    pub fn listing(msg: impl Into<String>) -> Self {
        Self::ReleaseListing(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a no-match error carrying the inputs that failed to resolve
    pub fn no_matching_release(
        package_version: impl Into<String>,
        repository_path: impl Into<String>,
    ) -> Self {
        Self::NoMatchingRelease {
            package_version: package_version.into(),
            repository_path: repository_path.into(),
        }
    }
}

// GitHub API failures surface as listing errors
impl From<octocrab::Error> for ReleaseError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. } => Self::ReleaseListing(
                format!(
                    "GitHub API error: status {}: {}",
                    source.status_code, source.message
                ),
            ),
            _ => Self::ReleaseListing(format!("GitHub API error: {}", err)),
        }
    }
}

// Gitea requests go through reqwest
impl From<reqwest::Error> for ReleaseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            Self::ReleaseListing(format!("Network request failed: {}", err))
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                401 | 403 => Self::ReleaseListing(format!(
                    "API authentication failed: {}",
                    err
                )),
                429 => Self::ReleaseListing("API rate limit exceeded".into()),
                _ => Self::ReleaseListing(format!("Gitea API error: {}", err)),
            }
        } else {
            Self::ReleaseListing(format!("Network request failed: {}", err))
        }
    }
}

impl From<crate::resolver::OverrideOptionsBuilderError> for ReleaseError {
    fn from(err: crate::resolver::OverrideOptionsBuilderError) -> Self {
        Self::InvalidConfig(format!("Override options error: {}", err))
    }
}

impl From<url::ParseError> for ReleaseError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidConfig(format!("URL parse error: {}", err))
    }
}

impl From<reqwest::header::InvalidHeaderValue> for ReleaseError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::InvalidConfig(format!("Invalid header value: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = ReleaseError::no_matching_release("0.14.0-dev.1", "owner/name");
        assert_eq!(
            err.to_string(),
            "No matching releases found for version 0.14.0-dev.1 in owner/name"
        );

        let err = ReleaseError::invalid_version("not-a-version");
        assert_eq!(err.to_string(), "Invalid version format: not-a-version");

        let err = ReleaseError::listing("boom");
        assert_eq!(err.to_string(), "Release listing failed: boom");
    }

    #[test]
    fn test_error_helpers() {
        let err = ReleaseError::listing("API call failed");
        assert!(matches!(err, ReleaseError::ReleaseListing(_)));

        let err = ReleaseError::invalid_config("missing host");
        assert!(matches!(err, ReleaseError::InvalidConfig(_)));

        let err = ReleaseError::no_matching_release("1.0.0", "a/b");
        assert!(matches!(err, ReleaseError::NoMatchingRelease { .. }));
    }

    #[test]
    fn test_from_conversions() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: ReleaseError = url_err.into();
        assert!(matches!(err, ReleaseError::InvalidConfig(_)));
    }
}
