//! CLI entry point for the air_forecast tool.
//!
//! Fetches the latest observation for a city, runs the multi-horizon
//! prediction pipeline against pre-trained artifacts, and prints the
//! per-horizon forecasts with AQI categories and a health advisory.

use air_forecast::aqi::AqiCategory;
use air_forecast::features::FeatureBuilder;
use air_forecast::fetch::WaqiClient;
use air_forecast::history::PmHistory;
use air_forecast::pipeline::run_cycle;
use air_forecast::registry::{Horizon, ModelRegistry, DEFAULT_HORIZONS};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "air_forecast")]
#[command(about = "Forecast PM2.5 for a city at multiple horizons", long_about = None)]
struct Cli {
    /// City to forecast (WAQI feed name, e.g. "delhi", "london")
    city: String,

    /// Directory containing the per-horizon model and scaler artifacts
    #[arg(short, long, default_value = "model")]
    model_dir: String,

    /// Forecast horizons in hours
    #[arg(long, value_delimiter = ',', default_values_t = vec![1u32, 3, 6, 12])]
    horizons: Vec<u32>,

    /// Optional CSV file with hourly pm25 history for lag features
    #[arg(long)]
    history: Option<String>,

    /// WAQI API token; falls back to the WAQI_API_TOKEN env var
    #[arg(long)]
    token: Option<String>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let horizons: Vec<Horizon> = if cli.horizons.is_empty() {
        DEFAULT_HORIZONS.to_vec()
    } else {
        cli.horizons.iter().map(|&h| Horizon(h)).collect()
    };

    // Artifact problems are fatal before any fetch happens
    let registry = ModelRegistry::load(&cli.model_dir, &horizons)
        .with_context(|| format!("Failed to load artifacts from {}", cli.model_dir))?;
    info!(horizons = registry.len(), "Registry loaded");

    let builder = match &cli.history {
        Some(path) => {
            let history = PmHistory::from_csv(path)
                .with_context(|| format!("Failed to load pm25 history from {}", path))?;
            info!(entries = history.len(), "Loaded pm25 history for lag features");
            FeatureBuilder::with_history(history)
        }
        None => FeatureBuilder::new(),
    };

    let client = match cli.token {
        Some(token) => WaqiClient::new(token),
        None => WaqiClient::from_env().context("No API token given and WAQI_API_TOKEN unset")?,
    };

    let report = run_cycle(client.fetch(&cli.city), &registry, &horizons, &builder);

    if let Some(message) = &report.acquisition_error {
        eprintln!("Failed to fetch real-time data: {}", message);
        eprintln!("Forecasts below are derived from placeholder data.");
    }

    println!("PM2.5 forecast for {}:", cli.city);
    for horizon in report.forecasts.horizons() {
        match report.forecasts.value(horizon) {
            Some(pm25) => {
                let category = AqiCategory::from_pm25(pm25);
                println!("  {:>5}  {:8.2} µg/m³  {}", horizon.to_string(), pm25, category);
            }
            None => println!("  {:>5}  unavailable", horizon.to_string()),
        }
    }

    if let Some(pm25) = horizons.first().and_then(|&h| report.forecasts.value(h)) {
        println!();
        println!("Health advisory ({} forecast):", horizons[0]);
        println!("  {}", AqiCategory::from_pm25(pm25).advisory());
    }

    Ok(())
}
