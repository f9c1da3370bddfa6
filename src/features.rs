//! Feature construction from raw observations

use crate::history::PmHistory;
use crate::observation::RawObservation;
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Number of slots in the feature schema
pub const FEATURE_COUNT: usize = 12;

/// Feature names in slot order. Every horizon's scaler and model was
/// trained against this exact schema; reordering or omitting a slot is
/// a contract violation.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "pm25",
    "temperature",
    "humidity",
    "wind_speed",
    "pressure",
    "hour",
    "day_of_week",
    "month",
    "pm25_lag_1",
    "pm25_lag_2",
    "pm25_lag_3",
    "pm25_lag_4",
];

/// Fixed-order, fixed-length numeric feature vector.
///
/// Named fields instead of a bare array so that schema drift shows up
/// at construction time, not at prediction time.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub pm25: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub pressure: f64,
    /// Hour of day, 0-23
    pub hour: f64,
    /// Day of week, 0-6 with Monday = 0
    pub day_of_week: f64,
    /// Month, 1-12
    pub month: f64,
    pub pm25_lag_1: f64,
    pub pm25_lag_2: f64,
    pub pm25_lag_3: f64,
    pub pm25_lag_4: f64,
}

impl FeatureVector {
    /// Slots in schema order, for handing to a scaler or model
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.pm25,
            self.temperature,
            self.humidity,
            self.wind_speed,
            self.pressure,
            self.hour,
            self.day_of_week,
            self.month,
            self.pm25_lag_1,
            self.pm25_lag_2,
            self.pm25_lag_3,
            self.pm25_lag_4,
        ]
    }
}

/// Per-field means over a batch of observations, used for imputation
#[derive(Debug, Clone, Copy, Default)]
struct FieldMeans {
    pm25: Option<f64>,
    temperature: Option<f64>,
    humidity: Option<f64>,
    wind_speed: Option<f64>,
    pressure: Option<f64>,
}

fn mean_of<F>(batch: &[RawObservation], field: F) -> Option<f64>
where
    F: Fn(&RawObservation) -> Option<f64>,
{
    let values: Vec<f64> = batch.iter().filter_map(field).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

impl FieldMeans {
    fn compute(batch: &[RawObservation]) -> Self {
        Self {
            pm25: mean_of(batch, |o| o.pm25),
            temperature: mean_of(batch, |o| o.temperature),
            humidity: mean_of(batch, |o| o.humidity),
            wind_speed: mean_of(batch, |o| o.wind_speed),
            pressure: mean_of(batch, |o| o.pressure),
        }
    }
}

/// Builds fixed-schema feature vectors from raw observations.
///
/// Missing measurement fields are imputed with the mean of the same
/// field across the batch being processed, or `0.0` when the batch has
/// no valid values for that field. In the real-time single-observation
/// case the "mean" degenerates to the single value. Missing data never
/// errors here.
#[derive(Debug, Clone, Default)]
pub struct FeatureBuilder {
    history: Option<PmHistory>,
}

impl FeatureBuilder {
    /// Builder with no historical lag source; lag slots backfill with
    /// the current pm25 value
    pub fn new() -> Self {
        Self { history: None }
    }

    /// Builder with a historical PM2.5 series supplying lag features
    pub fn with_history(history: PmHistory) -> Self {
        Self {
            history: Some(history),
        }
    }

    /// Build the feature vector for a single real-time observation
    pub fn build(&self, observation: &RawObservation) -> FeatureVector {
        let means = FieldMeans::compute(std::slice::from_ref(observation));
        self.build_one(observation, &means)
    }

    /// Build feature vectors for a batch, imputing missing fields with
    /// per-field batch means. An empty batch yields an empty output;
    /// the caller must treat that as "cannot predict".
    pub fn build_batch(&self, batch: &[RawObservation]) -> Vec<FeatureVector> {
        if batch.is_empty() {
            return Vec::new();
        }

        let means = FieldMeans::compute(batch);
        batch
            .iter()
            .map(|observation| self.build_one(observation, &means))
            .collect()
    }

    fn build_one(&self, observation: &RawObservation, means: &FieldMeans) -> FeatureVector {
        let timestamp: DateTime<Utc> = observation.timestamp.unwrap_or_else(Utc::now);

        let pm25 = impute(observation.pm25, means.pm25);
        let temperature = impute(observation.temperature, means.temperature);
        let humidity = impute(observation.humidity, means.humidity);
        let wind_speed = impute(observation.wind_speed, means.wind_speed);
        let pressure = impute(observation.pressure, means.pressure);

        FeatureVector {
            pm25,
            temperature,
            humidity,
            wind_speed,
            pressure,
            hour: timestamp.hour() as f64,
            day_of_week: timestamp.weekday().num_days_from_monday() as f64,
            month: timestamp.month() as f64,
            pm25_lag_1: self.lag_or(1, pm25),
            pm25_lag_2: self.lag_or(2, pm25),
            pm25_lag_3: self.lag_or(3, pm25),
            pm25_lag_4: self.lag_or(4, pm25),
        }
    }

    // Known approximation: with no historical series the current pm25
    // stands in for all four lag hours.
    fn lag_or(&self, hours_back: usize, current_pm25: f64) -> f64 {
        self.history
            .as_ref()
            .and_then(|h| h.lag(hours_back))
            .unwrap_or(current_pm25)
    }
}

fn impute(value: Option<f64>, batch_mean: Option<f64>) -> f64 {
    value.or(batch_mean).unwrap_or(0.0)
}
