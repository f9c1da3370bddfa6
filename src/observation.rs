//! Raw air-quality and weather observations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One measurement snapshot for a city at a point in time.
///
/// Every measurement field is optional: real-world stations routinely
/// drop individual sensors, and missing data is an expected, handled
/// case rather than a failure. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// PM2.5 concentration (µg/m³)
    pub pm25: Option<f64>,
    /// Temperature (°C)
    pub temperature: Option<f64>,
    /// Relative humidity (%)
    pub humidity: Option<f64>,
    /// Wind speed (m/s)
    pub wind_speed: Option<f64>,
    /// Atmospheric pressure (hPa)
    pub pressure: Option<f64>,
    /// Acquisition time; calendar features fall back to the current
    /// wall-clock time when absent
    pub timestamp: Option<DateTime<Utc>>,
}

impl RawObservation {
    /// Create an observation with all five measurement fields set
    pub fn new(
        pm25: f64,
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        pressure: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            pm25: Some(pm25),
            temperature: Some(temperature),
            humidity: Some(humidity),
            wind_speed: Some(wind_speed),
            pressure: Some(pressure),
            timestamp: Some(timestamp),
        }
    }

    /// Fixed placeholder observation substituted by the degradation
    /// policy when acquisition fails. The literal values are part of the
    /// documented contract.
    pub fn placeholder() -> Self {
        Self::new(150.0, 25.0, 60.0, 5.0, 1010.0, Utc::now())
    }

    /// True when none of the five measurement fields carry a value
    pub fn is_empty(&self) -> bool {
        self.pm25.is_none()
            && self.temperature.is_none()
            && self.humidity.is_none()
            && self.wind_speed.is_none()
            && self.pressure.is_none()
    }
}
