//! Error types for the air_forecast crate

use thiserror::Error;

/// Custom error types for the air_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error from the data acquisition adapter (network, API, parsing).
    /// The inner message is the adapter's message, kept verbatim so it
    /// can be surfaced to the caller unchanged.
    #[error("Acquisition error: {0}")]
    Acquisition(String),

    /// Missing or corrupt model/scaler artifact at load time
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Feature vector shape disagrees with a scaler or model
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Lookup of a horizon that was never registered
    #[error("Unknown forecast horizon: {0}h")]
    UnknownHorizon(u32),

    /// Error produced while running a model on a feature vector
    #[error("Prediction error: {0}")]
    Prediction(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    Data(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl ForecastError {
    /// The raw acquisition message, when this error came from the
    /// acquisition adapter; the full display string otherwise.
    pub fn acquisition_message(&self) -> String {
        match self {
            ForecastError::Acquisition(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
