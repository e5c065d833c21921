//! CLI argument parsing and forge platform configuration.
use clap::{Parser, Subcommand, ValueEnum};
use release_link::{
    ArchiveFormat, OverrideOptions, OverrideOptionsBuilder, ReleaseError,
    Remote, RemoteConfig, Result,
    forge::config::DEFAULT_GITHUB_BASE_URL,
};
use secrecy::SecretString;
use std::env;
use url::Url;

/// Global CLI arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Resolution subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the MAJOR.MINOR[-TAG] release line of a package version.
    Version {
        /// Package version, e.g. 0.14.2-dev.1
        package_version: String,

        #[arg(long)]
        /// Replace the package's major version.
        override_major_version: Option<u64>,
    },

    /// Print the archive link of the newest release on the package's line.
    Link {
        /// Package version, e.g. 0.14.2-dev.1
        package_version: String,

        /// Repository as owner/name.
        repository_path: String,

        #[arg(long)]
        /// Replace the package's major version when matching releases.
        override_major_version: Option<u64>,

        #[arg(long)]
        /// Replace the package's minor version when matching releases.
        override_minor_version: Option<u64>,

        #[command(flatten)]
        forge: ForgeArgs,
    },
}

/// Supported forge platforms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ForgeType {
    #[default]
    Github,
    Gitea,
}

/// Forge connection arguments for release listing.
#[derive(clap::Args, Debug, Clone)]
pub struct ForgeArgs {
    #[arg(long, value_enum, default_value_t = ForgeType::Github)]
    /// Forge hosting the repository.
    pub forge: ForgeType,

    #[arg(long)]
    /// Forge web address. Defaults to https://github.com for GitHub and is
    /// required for Gitea.
    pub base_url: Option<String>,

    #[arg(long)]
    /// Access token. Falls back to GITHUB_TOKEN or GITEA_TOKEN env var.
    pub token: Option<String>,

    #[arg(long, value_enum, default_value_t = ArchiveFormat::Tarball)]
    /// Which source archive to link.
    pub archive: ArchiveFormat,
}

impl ForgeArgs {
    /// Configure remote release source connection from CLI arguments.
    pub fn get_remote(&self) -> Result<Remote> {
        match self.forge {
            ForgeType::Github => {
                let base_url = self
                    .base_url
                    .as_deref()
                    .unwrap_or(DEFAULT_GITHUB_BASE_URL);
                let token =
                    resolve_token(self.token.as_deref(), "GITHUB_TOKEN");
                Ok(Remote::Github(RemoteConfig {
                    api_base_url: github_api_url(base_url)?,
                    token,
                    archive_format: self.archive,
                }))
            }
            ForgeType::Gitea => {
                let base_url = self.base_url.as_deref().ok_or_else(|| {
                    ReleaseError::invalid_config(
                        "must set --base-url for gitea",
                    )
                })?;
                let token =
                    resolve_token(self.token.as_deref(), "GITEA_TOKEN");
                Ok(Remote::Gitea(RemoteConfig {
                    api_base_url: gitea_api_url(base_url)?,
                    token,
                    archive_format: self.archive,
                }))
            }
        }
    }
}

/// Builds override options from the optional CLI overrides.
pub fn override_options(
    override_major_version: Option<u64>,
    override_minor_version: Option<u64>,
) -> Result<OverrideOptions> {
    let mut builder = OverrideOptionsBuilder::default();

    if let Some(major) = override_major_version {
        builder.override_major_version(major);
    }

    if let Some(minor) = override_minor_version {
        builder.override_minor_version(minor);
    }

    Ok(builder.build()?)
}

/// Explicit token first, then the forge's environment variable. Empty
/// values count as unset.
fn resolve_token(
    explicit: Option<&str>,
    env_var: &str,
) -> Option<SecretString> {
    explicit
        .filter(|token| !token.is_empty())
        .map(String::from)
        .or_else(|| env::var(env_var).ok().filter(|token| !token.is_empty()))
        .map(SecretString::from)
}

/// Validate forge URL uses HTTP or HTTPS scheme and has a host.
fn parse_base_url(base_url: &str) -> Result<Url> {
    let parsed = Url::parse(base_url)?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(ReleaseError::invalid_config(
                "only http and https schemes are supported for forge urls",
            ));
        }
    }

    if parsed.host_str().is_none() {
        return Err(ReleaseError::invalid_config(format!(
            "unable to parse host from forge url: {base_url}"
        )));
    }

    Ok(parsed)
}

/// GitHub.com serves its REST API from `api.github.com`. GitHub Enterprise
/// Server serves it under `/api/v3/` of the instance.
fn github_api_url(base_url: &str) -> Result<Url> {
    let parsed = parse_base_url(base_url)?;

    match parsed.host_str() {
        Some("github.com" | "api.github.com") => {
            Ok(Url::parse("https://api.github.com/")?)
        }
        _ => Ok(api_url_under(&parsed, "/api/v3")),
    }
}

/// Gitea serves its REST API under `/api/v1/` of the instance, which may
/// itself live under a sub-path.
fn gitea_api_url(base_url: &str) -> Result<Url> {
    let parsed = parse_base_url(base_url)?;
    Ok(api_url_under(&parsed, "/api/v1"))
}

/// Appends `api_path` to the instance path unless it is already there.
fn api_url_under(instance: &Url, api_path: &str) -> Url {
    let path = instance.path().trim_end_matches('/');
    let prefix = path.strip_suffix(api_path).unwrap_or(path);

    let mut api_url = instance.clone();
    api_url.set_path(&format!("{prefix}{api_path}/"));
    api_url.set_query(None);
    api_url.set_fragment(None);
    api_url
}

#[cfg(test)]
mod tests {
    //! Unit tests for CLI argument parsing and remote configuration.
    use super::*;
    use secrecy::ExposeSecret;

    fn forge_args(forge: ForgeType, base_url: Option<&str>) -> ForgeArgs {
        ForgeArgs {
            forge,
            base_url: base_url.map(String::from),
            token: Some("explicit-token".into()),
            archive: ArchiveFormat::Tarball,
        }
    }

    #[test]
    fn gets_github_remote_with_default_url() {
        let remote = forge_args(ForgeType::Github, None).get_remote().unwrap();

        assert!(matches!(remote, Remote::Github(_)));
        assert_eq!(
            remote.config().api_base_url.as_str(),
            "https://api.github.com/"
        );
        assert!(remote.config().token.is_some());
    }

    #[test]
    fn gets_github_enterprise_remote() {
        let remote =
            forge_args(ForgeType::Github, Some("https://ghe.example.com:8443"))
                .get_remote()
                .unwrap();

        assert_eq!(
            remote.config().api_base_url.as_str(),
            "https://ghe.example.com:8443/api/v3/"
        );
    }

    #[test]
    fn keeps_existing_enterprise_api_path() {
        let base_url = "https://ghe.example.com/api/v3";
        let remote = forge_args(ForgeType::Github, Some(base_url))
            .get_remote()
            .unwrap();

        assert_eq!(
            remote.config().api_base_url.as_str(),
            "https://ghe.example.com/api/v3/"
        );
    }

    #[test]
    fn maps_github_web_host_to_api_host() {
        let remote =
            forge_args(ForgeType::Github, Some("https://github.com/dashevo"))
                .get_remote()
                .unwrap();

        assert_eq!(
            remote.config().api_base_url.as_str(),
            "https://api.github.com/"
        );
    }

    #[test]
    fn gets_gitea_remote() {
        let remote =
            forge_args(ForgeType::Gitea, Some("http://gitea.com/sub/"))
                .get_remote()
                .unwrap();

        assert!(matches!(remote, Remote::Gitea(_)));
        assert_eq!(
            remote.config().api_base_url.as_str(),
            "http://gitea.com/sub/api/v1/"
        );
    }

    #[test]
    fn gitea_requires_base_url() {
        let result = forge_args(ForgeType::Gitea, None).get_remote();
        assert!(matches!(result, Err(ReleaseError::InvalidConfig(_))));
    }

    #[test]
    fn only_supports_http_and_https_schemes() {
        let result =
            forge_args(ForgeType::Gitea, Some("ssh://git@gitea.com/owner"))
                .get_remote();
        assert!(matches!(result, Err(ReleaseError::InvalidConfig(_))));

        let result =
            forge_args(ForgeType::Github, Some("not a url")).get_remote();
        assert!(matches!(result, Err(ReleaseError::InvalidConfig(_))));
    }

    #[test]
    fn archive_format_is_carried_into_remote() {
        let mut args = forge_args(ForgeType::Github, None);
        args.archive = ArchiveFormat::Zipball;
        let remote = args.get_remote().unwrap();
        assert_eq!(remote.config().archive_format, ArchiveFormat::Zipball);
    }

    #[test]
    fn parses_link_command() {
        let args = Args::try_parse_from([
            "release-link",
            "link",
            "1.14.0-dev.1",
            "dashevo/tenderdash",
            "--override-major-version",
            "0",
            "--archive",
            "zipball",
        ])
        .unwrap();

        match args.command {
            Command::Link {
                package_version,
                repository_path,
                override_major_version,
                override_minor_version,
                forge,
            } => {
                assert_eq!(package_version, "1.14.0-dev.1");
                assert_eq!(repository_path, "dashevo/tenderdash");
                assert_eq!(override_major_version, Some(0));
                assert_eq!(override_minor_version, None);
                assert_eq!(forge.forge, ForgeType::Github);
                assert_eq!(forge.archive, ArchiveFormat::Zipball);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_version_command_with_global_debug() {
        let args = Args::try_parse_from([
            "release-link",
            "version",
            "0.14.2-dev.1",
            "--debug",
        ])
        .unwrap();

        assert!(args.debug);
        assert!(matches!(
            args.command,
            Command::Version {
                override_major_version: None,
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_override() {
        let result = Args::try_parse_from([
            "release-link",
            "version",
            "0.14.2",
            "--override-major-version",
            "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_explicit_token_falls_back_to_env() {
        temp_env::with_var("GITEA_TOKEN", Some("env-token"), || {
            let token = resolve_token(Some(""), "GITEA_TOKEN").unwrap();
            assert_eq!(token.expose_secret(), "env-token");
        });
    }

    #[test]
    fn uses_env_token_when_none_given() {
        temp_env::with_var("GITHUB_TOKEN", Some("env-token"), || {
            let mut args = forge_args(ForgeType::Github, None);
            args.token = None;
            let remote = args.get_remote().unwrap();

            let token = remote.config().token.as_ref().unwrap();
            assert_eq!(token.expose_secret(), "env-token");
        });
    }

    #[test]
    fn explicit_token_wins_over_env() {
        temp_env::with_var("GITHUB_TOKEN", Some("env-token"), || {
            let token =
                resolve_token(Some("explicit-token"), "GITHUB_TOKEN").unwrap();
            assert_eq!(token.expose_secret(), "explicit-token");
        });
    }

    #[test]
    fn no_token_anywhere_is_none() {
        temp_env::with_var_unset("GITEA_TOKEN", || {
            assert!(resolve_token(None, "GITEA_TOKEN").is_none());
            assert!(resolve_token(Some(""), "GITEA_TOKEN").is_none());
        });

        temp_env::with_var("GITEA_TOKEN", Some(""), || {
            assert!(resolve_token(None, "GITEA_TOKEN").is_none());
        });
    }

    #[test]
    fn builds_override_options_from_flags() {
        let options = override_options(Some(0), None).unwrap();
        assert_eq!(options.override_major_version, Some(0));
        assert_eq!(options.override_minor_version, None);

        let options = override_options(None, Some(15)).unwrap();
        assert_eq!(options.override_major_version, None);
        assert_eq!(options.override_minor_version, Some(15));

        assert_eq!(
            override_options(None, None).unwrap(),
            OverrideOptions::default()
        );
    }
}
