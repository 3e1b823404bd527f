//! Command-line interface parsing for Dog Breeds CLI
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a validated `StartupConfig` describing which data source to use.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use thiserror::Error;

use crate::data::dog_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::data::FetcherConfig;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The API base URL is not an http(s) URL
    #[error("Invalid base URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    /// The request timeout must be at least one second
    #[error("Invalid timeout: must be greater than 0 seconds")]
    InvalidTimeout,
}

/// Dog Breeds CLI - Look up the sub-breeds of dog breeds
#[derive(Parser, Debug)]
#[command(name = "dogbreeds")]
#[command(about = "Look up dog sub-breeds, caching repeated lookups")]
#[command(version)]
pub struct Cli {
    /// Breeds to look up, in order. Repeated breeds are answered from the cache.
    #[arg(required = true, value_name = "BREED")]
    pub breeds: Vec<String>,

    /// Read breeds from a local JSON file instead of the dog.ceo API
    #[arg(long, value_name = "PATH", env = "DOGBREEDS_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Base URL of the dog.ceo API
    #[arg(long, value_name = "URL", env = "DOGBREEDS_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print the number of upstream calls and cached breeds when done
    #[arg(long)]
    pub stats: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Where breed data comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// The dog.ceo HTTP API
    Api(FetcherConfig),
    /// A local JSON file
    File(PathBuf),
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Breeds to look up, in command-line order
    pub breeds: Vec<String>,
    /// Data source backing the cache
    pub source: DataSource,
    /// Whether to print call statistics
    pub show_stats: bool,
    /// Log verbosity level
    pub verbosity: u8,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if the API settings are invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let source = match &cli.data_file {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Api(api_config(&cli.base_url, cli.timeout)?),
        };

        Ok(StartupConfig {
            breeds: cli.breeds.clone(),
            source,
            show_stats: cli.stats,
            verbosity: cli.verbose,
        })
    }
}

/// Validates the API arguments into a FetcherConfig
fn api_config(base_url: &str, timeout_secs: u64) -> Result<FetcherConfig, CliError> {
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(CliError::InvalidBaseUrl(base_url.to_string()));
    }
    if timeout_secs == 0 {
        return Err(CliError::InvalidTimeout);
    }

    Ok(FetcherConfig {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(timeout_secs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_single_breed() {
        let cli = Cli::parse_from(["dogbreeds", "hound"]);
        assert_eq!(cli.breeds, vec!["hound"]);
        assert!(cli.data_file.is_none());
        assert!(!cli.stats);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_keeps_breed_order_and_repeats() {
        let cli = Cli::parse_from(["dogbreeds", "hound", "pug", "hound"]);
        assert_eq!(cli.breeds, vec!["hound", "pug", "hound"]);
    }

    #[test]
    fn test_cli_requires_a_breed() {
        assert!(Cli::try_parse_from(["dogbreeds"]).is_err());
    }

    #[test]
    fn test_cli_verbosity_counts() {
        let cli = Cli::parse_from(["dogbreeds", "-vv", "hound"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_startup_config_defaults_to_api() {
        let cli = Cli::parse_from(["dogbreeds", "hound"]);
        let config = StartupConfig::from_cli(&cli).unwrap();

        match config.source {
            DataSource::Api(api) => {
                assert_eq!(api.base_url, DEFAULT_BASE_URL);
                assert_eq!(api.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
            }
            DataSource::File(_) => panic!("Expected API data source"),
        }
        assert!(!config.show_stats);
    }

    #[test]
    fn test_startup_config_with_data_file() {
        let cli = Cli::parse_from(["dogbreeds", "--data-file", "breeds.json", "--stats", "hound"]);
        let config = StartupConfig::from_cli(&cli).unwrap();

        assert_eq!(config.source, DataSource::File(PathBuf::from("breeds.json")));
        assert!(config.show_stats);
        assert_eq!(config.breeds, vec!["hound"]);
    }

    #[test]
    fn test_data_file_skips_api_validation() {
        let cli = Cli::parse_from([
            "dogbreeds",
            "--data-file",
            "breeds.json",
            "--base-url",
            "not-a-url",
            "hound",
        ]);
        assert!(StartupConfig::from_cli(&cli).is_ok());
    }

    #[test]
    fn test_startup_config_custom_api() {
        let cli = Cli::parse_from([
            "dogbreeds",
            "--base-url",
            "http://localhost:8080/api",
            "--timeout",
            "3",
            "hound",
        ]);
        let config = StartupConfig::from_cli(&cli).unwrap();

        assert_eq!(
            config.source,
            DataSource::Api(FetcherConfig {
                base_url: "http://localhost:8080/api".to_string(),
                timeout: Duration::from_secs(3),
            })
        );
    }

    #[test]
    fn test_startup_config_invalid_base_url() {
        let cli = Cli::parse_from(["dogbreeds", "--base-url", "ftp://dog.ceo", "hound"]);
        let err = StartupConfig::from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("Invalid base URL"));
        assert!(err.to_string().contains("ftp://dog.ceo"));
    }

    #[test]
    fn test_startup_config_zero_timeout() {
        let cli = Cli::parse_from(["dogbreeds", "--timeout", "0", "hound"]);
        let err = StartupConfig::from_cli(&cli).unwrap_err();
        assert!(matches!(err, CliError::InvalidTimeout));
    }
}
