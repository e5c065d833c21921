//! Release sources backed by Git forge platforms (GitHub, Gitea).
//!
//! Each platform client implements [`traits::ReleaseSource`], which is the
//! only capability the resolvers need: listing the releases of a repository.

/// Configuration and authentication for forge platforms.
pub mod config;

/// Factory for building a release source from a [`config::Remote`].
pub mod factory;

/// Gitea and Forgejo release source.
pub mod gitea;

/// GitHub release source for GitHub.com and GitHub Enterprise Server.
pub mod github;

/// Common traits for forge platform abstraction.
pub mod traits;

/// Shared data types for releases.
pub mod types;
