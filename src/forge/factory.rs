//! Factory for creating release sources based on configuration.

use crate::{
    error::Result,
    forge::{
        config::{Remote, RemoteConfig},
        gitea::Gitea,
        github::Github,
        traits::ReleaseSource,
    },
};

/// Factory for creating release source implementations.
pub struct ForgeFactory;

impl ForgeFactory {
    /// Create the release source for the configured platform.
    pub fn create(remote: &Remote) -> Result<Box<dyn ReleaseSource>> {
        match remote {
            Remote::Github(config) => Self::create_github(config),
            Remote::Gitea(config) => Self::create_gitea(config),
        }
    }

    fn create_github(config: &RemoteConfig) -> Result<Box<dyn ReleaseSource>> {
        Ok(Box::new(Github::new(config.clone())?))
    }

    fn create_gitea(config: &RemoteConfig) -> Result<Box<dyn ReleaseSource>> {
        Ok(Box::new(Gitea::new(config.clone())?))
    }
}
