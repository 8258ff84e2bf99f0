use crate::console::VerbosityLevel;
use crate::coordinates::{CoordinateError, Coordinates};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;

/// Print the image for the current time of day at a location
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Increase verbosity (-v verbose, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode - only show the result and errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Base URL of the sunrise/sunset API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Classify this instant (RFC 3339) instead of the current time
    #[arg(long, value_name = "TIMESTAMP", value_parser = parse_instant)]
    pub at: Option<DateTime<Utc>>,

    /// Read configuration from this file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Latitude in decimal degrees
    #[arg(allow_hyphen_values = true)]
    pub latitude: String,

    /// Longitude in decimal degrees
    #[arg(allow_hyphen_values = true)]
    pub longitude: String,

    /// Extra positionals are accepted and ignored
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {}", e))
}

impl Cli {
    pub fn coordinates(&self) -> Result<Coordinates, CoordinateError> {
        Coordinates::parse(&self.latitude, &self.longitude)
    }

    pub fn get_verbosity(&self) -> VerbosityLevel {
        if self.quiet {
            VerbosityLevel::Quiet
        } else {
            match self.verbose {
                0 => VerbosityLevel::Normal,
                1 => VerbosityLevel::Verbose,
                _ => VerbosityLevel::Debug,
            }
        }
    }

    pub fn get_effective_verbosity(&self, config_verbosity: VerbosityLevel) -> VerbosityLevel {
        if self.quiet || self.verbose > 0 {
            // CLI verbosity specified, use it
            self.get_verbosity()
        } else {
            config_verbosity
        }
    }
}
