//! Scaler and regression model artifacts
//!
//! Both types are opaque transforms from the pipeline's point of view:
//! deserialize once at startup, then call `transform`/`predict` any
//! number of times. Inference is fully deterministic.

use crate::error::{ForecastError, Result};
use crate::features::{FeatureVector, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

/// Standard (z-score) scaler fitted offline over the feature schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-slot means, in feature schema order
    pub mean: Vec<f64>,
    /// Per-slot standard deviations, in feature schema order
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Scaler that passes every slot through unchanged
    pub fn identity() -> Self {
        Self {
            mean: vec![0.0; FEATURE_COUNT],
            scale: vec![1.0; FEATURE_COUNT],
        }
    }

    /// Apply the z-score transform to a feature vector
    pub fn transform(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(ForecastError::SchemaMismatch(format!(
                "Scaler expects {} slots but carries {} means and {} scales",
                FEATURE_COUNT,
                self.mean.len(),
                self.scale.len()
            )));
        }

        let scaled = features
            .to_array()
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(value, (mean, scale))| {
                if *scale == 0.0 {
                    value - mean
                } else {
                    (value - mean) / scale
                }
            })
            .collect();

        Ok(scaled)
    }
}

/// Pre-trained regression model over the scaled feature vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressionModel {
    /// Constant predictor, used by smoke-test artifacts
    Constant { value: f64 },
    /// Linear regression over the scaled features
    Linear { weights: Vec<f64>, intercept: f64 },
}

impl RegressionModel {
    /// Predict a single PM2.5 value from a scaled feature vector
    pub fn predict(&self, scaled: &[f64]) -> Result<f64> {
        let prediction = match self {
            RegressionModel::Constant { value } => *value,
            RegressionModel::Linear { weights, intercept } => {
                if weights.len() != scaled.len() {
                    return Err(ForecastError::SchemaMismatch(format!(
                        "Model expects {} weights for {} features",
                        weights.len(),
                        scaled.len()
                    )));
                }
                weights
                    .iter()
                    .zip(scaled.iter())
                    .map(|(w, x)| w * x)
                    .sum::<f64>()
                    + intercept
            }
        };

        if !prediction.is_finite() {
            return Err(ForecastError::Prediction(format!(
                "Model produced a non-finite value: {}",
                prediction
            )));
        }

        Ok(prediction)
    }

    /// Name of the model variant
    pub fn name(&self) -> &str {
        match self {
            RegressionModel::Constant { .. } => "Constant",
            RegressionModel::Linear { .. } => "Linear",
        }
    }
}
