//! Historical PM2.5 series used as a lag-feature source

use crate::error::{ForecastError, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Hourly PM2.5 history, ordered oldest first.
///
/// Optional collaborator of the feature builder: when present, lag
/// features come from here; when absent or too short, the builder
/// backfills lags with the current reading.
#[derive(Debug, Clone)]
pub struct PmHistory {
    values: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct HistoryRecord {
    pm25: f64,
}

impl PmHistory {
    /// Create a history from hourly values, oldest first
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Load a history from a CSV file with a `pm25` column, one row per
    /// hour, oldest first
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut values = Vec::new();
        for record in reader.deserialize::<HistoryRecord>() {
            values.push(record?.pm25);
        }

        if values.is_empty() {
            return Err(ForecastError::Data(
                "History file contains no pm25 rows".to_string(),
            ));
        }

        Ok(Self { values })
    }

    /// The PM2.5 value `hours_back` hours before the most recent entry
    /// (`lag(1)` is the last entry), if the series reaches that far
    pub fn lag(&self, hours_back: usize) -> Option<f64> {
        if hours_back == 0 || hours_back > self.values.len() {
            return None;
        }
        Some(self.values[self.values.len() - hours_back])
    }

    /// Number of hourly entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the series holds no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
