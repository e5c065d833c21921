use clap::Parser;
use color_eyre::eyre::Context;

mod cli;
mod command;
mod result;

use crate::result::Result;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("release_link")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let output = match cli_args.command {
        cli::Command::Version {
            package_version,
            override_major_version,
        } => command::version::execute(
            &package_version,
            &cli::override_options(override_major_version, None)?,
        )?,
        cli::Command::Link {
            package_version,
            repository_path,
            override_major_version,
            override_minor_version,
            forge,
        } => {
            let remote = forge
                .get_remote()
                .wrap_err("failed to configure forge connection")?;

            let options = cli::override_options(
                override_major_version,
                override_minor_version,
            )?;

            command::link::execute(
                &remote,
                &package_version,
                &repository_path,
                &options,
            )
            .await?
        }
    };

    println!("{output}");

    Ok(())
}
