//! Horizon model registry
//!
//! Holds one immutable (scaler, model) pair per forecast horizon,
//! loaded once at process start and shared read-only by any number of
//! concurrent prediction calls (load-then-freeze discipline).

use crate::error::{ForecastError, Result};
use crate::models::{RegressionModel, StandardScaler};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::path::Path;

/// Forecast horizon in hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Horizon(pub u32);

/// The default configured horizon set. Changing it only requires
/// re-registering that many (model, scaler) pairs at load time.
pub const DEFAULT_HORIZONS: [Horizon; 4] = [Horizon(1), Horizon(3), Horizon(6), Horizon(12)];

impl Horizon {
    /// Horizon length in hours
    pub fn hours(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}h", self.0)
    }
}

/// Immutable (scaler, model) pair for one forecast horizon
#[derive(Debug, Clone)]
pub struct HorizonModel {
    /// Scaler applied to the feature vector before prediction
    pub scaler: StandardScaler,
    /// Regression model applied to the scaled vector
    pub model: RegressionModel,
}

/// Registry of horizon models, read-only after construction
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    entries: BTreeMap<Horizon, HorizonModel>,
}

fn model_file_name(horizon: Horizon) -> String {
    format!("air_quality_model_{}h.json", horizon.hours())
}

fn scaler_file_name(horizon: Horizon) -> String {
    format!("data_scaler_{}h.json", horizon.hours())
}

fn read_artifact<T: serde::de::DeserializeOwned>(dir: &Path, file_name: &str) -> Result<T> {
    let path = dir.join(file_name);
    let file = File::open(&path).map_err(|e| {
        ForecastError::Artifact(format!("Cannot open {}: {}", path.display(), e))
    })?;
    serde_json::from_reader(file).map_err(|e| {
        ForecastError::Artifact(format!("Cannot parse {}: {}", path.display(), e))
    })
}

impl ModelRegistry {
    /// Load the scaler and model artifacts for every requested horizon
    /// from `dir`.
    ///
    /// Any missing or corrupt artifact fails the whole load: serving
    /// must not begin with a silently absent horizon.
    pub fn load<P: AsRef<Path>>(dir: P, horizons: &[Horizon]) -> Result<Self> {
        let dir = dir.as_ref();
        let mut entries = BTreeMap::new();

        for &horizon in horizons {
            let scaler: StandardScaler = read_artifact(dir, &scaler_file_name(horizon))?;
            let model: RegressionModel = read_artifact(dir, &model_file_name(horizon))?;
            tracing::info!(horizon = horizon.hours(), model = model.name(), "Loaded horizon artifacts");
            entries.insert(horizon, HorizonModel { scaler, model });
        }

        Ok(Self { entries })
    }

    /// Build a registry from in-memory pairs, for embedding and tests
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Horizon, HorizonModel)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Look up the (scaler, model) pair for a horizon.
    ///
    /// An unregistered horizon is a programming error, distinct from a
    /// data-availability error.
    pub fn get(&self, horizon: Horizon) -> Result<&HorizonModel> {
        self.entries
            .get(&horizon)
            .ok_or(ForecastError::UnknownHorizon(horizon.hours()))
    }

    /// Registered horizons in ascending order
    pub fn horizons(&self) -> impl Iterator<Item = Horizon> + '_ {
        self.entries.keys().copied()
    }

    /// Number of registered horizons
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no horizons are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Write the JSON artifacts for one horizon into `dir`, using the
/// conventional file names the registry loads from
pub fn write_artifacts<P: AsRef<Path>>(
    dir: P,
    horizon: Horizon,
    scaler: &StandardScaler,
    model: &RegressionModel,
) -> Result<()> {
    let dir = dir.as_ref();
    let scaler_file = File::create(dir.join(scaler_file_name(horizon)))?;
    serde_json::to_writer_pretty(scaler_file, scaler)?;
    let model_file = File::create(dir.join(model_file_name(horizon)))?;
    serde_json::to_writer_pretty(model_file, model)?;
    Ok(())
}
