//! Skycast CLI
//!
//! Resolves a location name, assembles the combined weather / air quality /
//! flood report, persists it as JSON, and prints a natural-language advisory.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use application::ports::{ForecastDataPort, GeocodingPort, InferencePort, ReportStorePort};
use application::{AdvisorService, LocationService, ReportService};
use clap::Parser;
use infrastructure::{
    AppConfig, GeocodingAdapter, OllamaInferenceAdapter, OpenMeteoAdapter, ReportFileStore,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Skycast CLI
#[derive(Parser)]
#[command(name = "skycast")]
#[command(author, version, about = "Weather, air quality and flood risk advisor", long_about = None)]
struct Cli {
    /// Free-text location to report on
    location: Option<String>,
}

/// Pick the location query, falling back to the configured default
fn location_or_default(arg: Option<String>, default: &str) -> (String, bool) {
    match arg {
        Some(location) => (location, false),
        None => (default.to_string(), true),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    let (location_query, defaulted) =
        location_or_default(cli.location, &config.report.default_location);
    if defaulted {
        println!("No location provided. Defaulting to '{location_query}'.");
    }

    // Wire adapters and services
    let geocoding: Arc<dyn GeocodingPort> = Arc::new(GeocodingAdapter::new(&config.geocoding)?);
    let data: Arc<dyn ForecastDataPort> =
        Arc::new(OpenMeteoAdapter::with_config(config.openmeteo.clone())?);
    let inference: Arc<dyn InferencePort> =
        Arc::new(OllamaInferenceAdapter::new(config.inference.clone())?);
    let store = ReportFileStore::new(config.report.path.clone());

    let locations = LocationService::new(geocoding);
    let reports = ReportService::new(data);
    let advisor = AdvisorService::new(inference);

    println!("## Skycast Weather Advisor ##");
    println!("-----------------------------");

    // Step 1: resolve the location to a coordinate pair
    let pair = locations.coordinates_pair(&location_query).await;
    if pair.starts_with("Error:") {
        println!("{pair}");
        return Ok(());
    }
    info!(%pair, "Location resolved");

    // Step 2: assemble and persist the report
    let report = reports.assemble_from_pair(&pair).await?;
    store.save(&report).await?;
    info!(path = %store.path().display(), "Report persisted");

    // Step 3: turn the report into advice
    match advisor.advise(&report).await {
        Ok(advisory) => {
            println!();
            println!("## Here is the weather advisory:");
            println!();
            println!("{}", advisory.text);
        },
        Err(e) => {
            println!();
            println!("Advisory unavailable ({e}). Raw report:");
            println!();
            println!("{}", report.to_json_pretty()?);
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_location_is_used_verbatim() {
        let (query, defaulted) =
            location_or_default(Some("Paris".to_string()), "Austin, Texas, USA");
        assert_eq!(query, "Paris");
        assert!(!defaulted);
    }

    #[test]
    fn missing_location_falls_back_to_default() {
        let (query, defaulted) = location_or_default(None, "Austin, Texas, USA");
        assert_eq!(query, "Austin, Texas, USA");
        assert!(defaulted);
    }

    #[test]
    fn cli_parses_positional_location() {
        let cli = Cli::parse_from(["skycast", "Paris"]);
        assert_eq!(cli.location.as_deref(), Some("Paris"));

        let cli = Cli::parse_from(["skycast"]);
        assert!(cli.location.is_none());
    }

    #[test]
    fn cli_accepts_multi_word_location_as_single_arg() {
        let cli = Cli::parse_from(["skycast", "Austin, Texas, USA"]);
        assert_eq!(cli.location.as_deref(), Some("Austin, Texas, USA"));
    }
}
