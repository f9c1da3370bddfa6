//! # Air Forecast
//!
//! A Rust library for real-time air quality acquisition and
//! multi-horizon PM2.5 forecasting.
//!
//! ## Features
//!
//! - Fixed-schema feature construction from noisy real-time observations
//!   (calendar features, batch-mean imputation, lag backfill)
//! - A load-once, read-only registry of per-horizon (scaler, model) pairs
//! - Independent per-horizon prediction with isolated failures
//! - A degradation policy that substitutes a documented placeholder
//!   observation when acquisition fails, without hiding the substitution
//! - US EPA AQI categorization and canned health advisories
//! - A WAQI acquisition adapter for live data
//!
//! ## Quick Start
//!
//! ```no_run
//! use air_forecast::features::FeatureBuilder;
//! use air_forecast::fetch::WaqiClient;
//! use air_forecast::pipeline::run_cycle;
//! use air_forecast::registry::{ModelRegistry, DEFAULT_HORIZONS};
//!
//! # fn main() -> air_forecast::Result<()> {
//! // Load the per-horizon artifacts once, before serving predictions
//! let registry = ModelRegistry::load("model", &DEFAULT_HORIZONS)?;
//! let builder = FeatureBuilder::new();
//!
//! // Fetch and forecast; acquisition failure degrades to placeholder data
//! let client = WaqiClient::from_env()?;
//! let report = run_cycle(client.fetch("delhi"), &registry, &DEFAULT_HORIZONS, &builder);
//!
//! for horizon in report.forecasts.horizons() {
//!     match report.forecasts.value(horizon) {
//!         Some(pm25) => println!("{}: {:.2} µg/m³", horizon, pm25),
//!         None => println!("{}: unavailable", horizon),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod aqi;
pub mod error;
pub mod features;
pub mod fetch;
pub mod history;
pub mod models;
pub mod observation;
pub mod pipeline;
pub mod predictor;
pub mod registry;

// Re-export commonly used types
pub use crate::aqi::AqiCategory;
pub use crate::error::{ForecastError, Result};
pub use crate::features::{FeatureBuilder, FeatureVector};
pub use crate::observation::RawObservation;
pub use crate::pipeline::{run_cycle, CycleReport};
pub use crate::predictor::{predict, ForecastResult};
pub use crate::registry::{Horizon, ModelRegistry, DEFAULT_HORIZONS};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
