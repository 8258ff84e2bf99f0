use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use daypart::{
    AppConfig, DaypartError, DaypartResult, SunriseSunsetClient,
    cli::Cli,
    console::{console, init_console},
    resolve_image,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print().context("Failed to print usage")?;
            return Ok(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(DaypartError::EXIT_CODE),
            });
        }
    };

    match run(&cli).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            console().error(&e.user_message());
            Ok(ExitCode::from(DaypartError::EXIT_CODE))
        }
    }
}

async fn run(cli: &Cli) -> DaypartResult<()> {
    let coordinates = cli.coordinates()?;
    let config = AppConfig::load(cli.config.as_deref())?;

    // CLI verbosity takes precedence over config
    init_console(cli.get_effective_verbosity(config.get_verbosity()));

    if !coordinates.is_in_range() {
        console().warning(&format!(
            "Coordinates ({}) are out of range; sending them to the API unchanged",
            coordinates
        ));
    }

    let client = SunriseSunsetClient::new(config.client_config(cli.api_url.as_deref()))?;
    console().debug(&format!("Using API at {}", client.base_url()));

    let outcome = resolve_image(&client, coordinates, cli.at).await?;
    console().result(outcome.image);
    Ok(())
}
