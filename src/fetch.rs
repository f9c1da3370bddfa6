//! WAQI acquisition adapter
//!
//! Fetches one real-time air-quality/weather snapshot for a city from
//! the World Air Quality Index API. This is the only place the crate
//! touches the network; the core pipeline treats it as a black box
//! returning either a fully-formed observation or a terminal error.
//! No retries here; retry policy, if any, belongs to the caller.

use crate::error::{ForecastError, Result};
use crate::observation::RawObservation;
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

const WAQI_BASE_URL: &str = "https://api.waqi.info";

/// Environment variable the API token is read from
pub const TOKEN_ENV_VAR: &str = "WAQI_API_TOKEN";

#[derive(Debug, Deserialize)]
struct WaqiEnvelope {
    status: String,
    #[serde(default)]
    data: Value,
}

#[derive(Debug, Deserialize)]
struct WaqiData {
    #[serde(default)]
    iaqi: HashMap<String, WaqiMeasurement>,
}

#[derive(Debug, Deserialize)]
struct WaqiMeasurement {
    v: f64,
}

/// Blocking HTTP client for the WAQI feed endpoint
#[derive(Debug)]
pub struct WaqiClient {
    http: reqwest::blocking::Client,
    token: String,
}

impl WaqiClient {
    /// Client with an explicit API token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            token: token.into(),
        }
    }

    /// Client with the token taken from the `WAQI_API_TOKEN` env var
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV_VAR).map_err(|_| {
            ForecastError::Acquisition(format!("{} is not set", TOKEN_ENV_VAR))
        })?;
        Ok(Self::new(token))
    }

    /// Fetch the latest observation for a city.
    ///
    /// Missing iaqi parameters become absent fields, not errors; the
    /// observation timestamp is the acquisition time.
    pub fn fetch(&self, city: &str) -> Result<RawObservation> {
        let url = format!(
            "{}/feed/{}/?token={}",
            WAQI_BASE_URL,
            city.to_lowercase(),
            self.token
        );

        let response = self
            .http
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| ForecastError::Acquisition(format!("Network or API error: {}", e)))?;

        let envelope: WaqiEnvelope = response
            .json()
            .map_err(|e| ForecastError::Acquisition(format!("Error parsing WAQI data: {}", e)))?;

        parse_envelope(envelope)
    }
}

fn parse_envelope(envelope: WaqiEnvelope) -> Result<RawObservation> {
    if envelope.status != "ok" {
        return Err(ForecastError::Acquisition(format!(
            "Error fetching data from WAQI: {}",
            envelope.data
        )));
    }

    let data: WaqiData = serde_json::from_value(envelope.data)
        .map_err(|e| ForecastError::Acquisition(format!("Error parsing WAQI data: {}", e)))?;

    let reading = |key: &str| data.iaqi.get(key).map(|m| m.v);
    let observation = RawObservation {
        pm25: reading("pm25"),
        temperature: reading("t"),
        humidity: reading("h"),
        wind_speed: reading("w"),
        pressure: reading("p"),
        timestamp: Some(Utc::now()),
    };

    debug!(?observation, "Fetched WAQI observation");
    Ok(observation)
}
