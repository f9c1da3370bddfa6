//! Multi-horizon prediction over a loaded registry

use crate::error::Result;
use crate::features::{FeatureBuilder, FeatureVector};
use crate::observation::RawObservation;
use crate::registry::{Horizon, HorizonModel, ModelRegistry};
use std::collections::BTreeMap;
use tracing::warn;

/// Per-horizon forecast map.
///
/// Always contains every requested horizon as a key; a horizon that
/// could not be predicted maps to the absent marker, with the cause
/// retained for diagnostics. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    values: BTreeMap<Horizon, Option<f64>>,
    failures: BTreeMap<Horizon, String>,
}

impl ForecastResult {
    /// Result with every requested horizon marked absent
    pub fn all_absent(horizons: &[Horizon]) -> Self {
        Self {
            values: horizons.iter().map(|&h| (h, None)).collect(),
            failures: BTreeMap::new(),
        }
    }

    /// Forecasted PM2.5 for one horizon, if available
    pub fn value(&self, horizon: Horizon) -> Option<f64> {
        self.values.get(&horizon).copied().flatten()
    }

    /// The full horizon → value-or-absent map
    pub fn values(&self) -> &BTreeMap<Horizon, Option<f64>> {
        &self.values
    }

    /// Failure cause for one horizon, when it resolved to absent
    pub fn failure(&self, horizon: Horizon) -> Option<&str> {
        self.failures.get(&horizon).map(String::as_str)
    }

    /// Horizons in ascending order
    pub fn horizons(&self) -> impl Iterator<Item = Horizon> + '_ {
        self.values.keys().copied()
    }

    /// True when every horizon carries a value
    pub fn is_complete(&self) -> bool {
        !self.values.is_empty() && self.values.values().all(Option::is_some)
    }
}

fn predict_one(entry: &HorizonModel, features: &FeatureVector) -> Result<f64> {
    let scaled = entry.scaler.transform(features)?;
    entry.model.predict(&scaled)
}

/// Run the full multi-horizon prediction for one observation.
///
/// An absent or empty observation yields an all-absent result; it never
/// errors. Otherwise the feature vector is built once and each horizon
/// is scaled and predicted independently: one horizon failing leaves
/// the others untouched. Pure compute over already-fetched data and
/// pre-loaded models; deterministic for fixed inputs.
pub fn predict(
    observation: Option<&RawObservation>,
    registry: &ModelRegistry,
    horizons: &[Horizon],
    builder: &FeatureBuilder,
) -> ForecastResult {
    let observation = match observation {
        Some(obs) if !obs.is_empty() => obs,
        _ => return ForecastResult::all_absent(horizons),
    };

    let features = builder.build(observation);

    let mut values = BTreeMap::new();
    let mut failures = BTreeMap::new();

    for &horizon in horizons {
        let outcome = registry
            .get(horizon)
            .and_then(|entry| predict_one(entry, &features));

        match outcome {
            Ok(forecast) => {
                values.insert(horizon, Some(forecast));
            }
            Err(e) => {
                warn!(horizon = horizon.hours(), error = %e, "Horizon prediction failed");
                values.insert(horizon, None);
                failures.insert(horizon, e.to_string());
            }
        }
    }

    ForecastResult { values, failures }
}
