//! Prediction cycle with degradation policy
//!
//! When acquisition fails, the cycle substitutes a fixed placeholder
//! observation and still runs the full pipeline: the system always
//! attempts a forecast when structurally possible, and the substitution
//! is an explicit, inspectable field of the report rather than a hidden
//! side effect.

use crate::error::Result;
use crate::features::FeatureBuilder;
use crate::observation::RawObservation;
use crate::predictor::{predict, ForecastResult};
use crate::registry::{Horizon, ModelRegistry};
use tracing::warn;

/// Outcome of one acquisition-to-forecast cycle
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// Per-horizon forecasts (all requested horizons present as keys)
    pub forecasts: ForecastResult,
    /// True when the forecasts were derived from the fixed placeholder
    /// observation rather than real data
    pub used_placeholder: bool,
    /// The acquisition adapter's error message, verbatim, when
    /// acquisition failed
    pub acquisition_error: Option<String>,
}

/// Run one prediction cycle on the adapter's output.
///
/// `fetched` is the acquisition adapter's result: a fully-formed
/// observation, or a terminal error. On error the placeholder
/// observation is substituted and the original message is carried
/// through to the caller unchanged.
pub fn run_cycle(
    fetched: Result<RawObservation>,
    registry: &ModelRegistry,
    horizons: &[Horizon],
    builder: &FeatureBuilder,
) -> CycleReport {
    match fetched {
        Ok(observation) => CycleReport {
            forecasts: predict(Some(&observation), registry, horizons, builder),
            used_placeholder: false,
            acquisition_error: None,
        },
        Err(e) => {
            let message = e.acquisition_message();
            warn!(error = %message, "Acquisition failed, substituting placeholder observation");

            let placeholder = RawObservation::placeholder();
            CycleReport {
                forecasts: predict(Some(&placeholder), registry, horizons, builder),
                used_placeholder: true,
                acquisition_error: Some(message),
            }
        }
    }
}
