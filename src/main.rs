//! Dog Breeds CLI - Look up the sub-breeds of dog breeds
//!
//! Resolves each breed given on the command line through a single
//! `BreedCache`, backed by the dog.ceo API or a local JSON file.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use dogbreeds::cache::BreedCache;
use dogbreeds::cli::{Cli, DataSource, StartupConfig};
use dogbreeds::data::{BreedError, BreedFetcher, DogApiClient, LocalBreedFetcher};
use dogbreeds::logging;

/// Builds the fetcher for the configured data source
fn build_fetcher(source: &DataSource) -> Result<Arc<dyn BreedFetcher>, BreedError> {
    match source {
        DataSource::Api(config) => {
            info!(base_url = %config.base_url, "using dog.ceo API");
            Ok(Arc::new(DogApiClient::new(config.clone())?))
        }
        DataSource::File(path) => {
            info!(path = %path.display(), "using local breed data");
            Ok(Arc::new(LocalBreedFetcher::from_json_file(path)?))
        }
    }
}

/// Formats one successful lookup for stdout
fn format_sub_breeds(breed: &str, sub_breeds: &[String]) -> String {
    if sub_breeds.is_empty() {
        format!("{}: (no sub-breeds)", breed)
    } else {
        format!("{}: {}", breed, sub_breeds.join(", "))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    let fetcher = match build_fetcher(&config.source) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let cache = BreedCache::new(fetcher);

    let mut failed = false;
    for breed in &config.breeds {
        match cache.get_sub_breeds(breed).await {
            Ok(sub_breeds) => println!("{}", format_sub_breeds(breed, &sub_breeds)),
            Err(e) => {
                eprintln!("error: {}", e);
                failed = true;
            }
        }
    }

    if config.show_stats {
        println!("upstream calls: {}", cache.calls_made());
        println!("cached breeds: {}", cache.len());
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
