use air_forecast::features::{FeatureBuilder, FEATURE_COUNT, FEATURE_NAMES};
use air_forecast::history::PmHistory;
use air_forecast::observation::RawObservation;
use assert_approx_eq::assert_approx_eq;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

fn full_observation() -> RawObservation {
    // Sunday 2023-01-01 10:00 UTC
    let timestamp = Utc.with_ymd_and_hms(2023, 1, 1, 10, 0, 0).unwrap();
    RawObservation::new(150.0, 25.0, 60.0, 5.0, 1010.0, timestamp)
}

#[test]
fn test_full_observation_produces_fixed_schema() {
    let builder = FeatureBuilder::new();
    let features = builder.build(&full_observation());
    let slots = features.to_array();

    assert_eq!(slots.len(), FEATURE_COUNT);
    assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);

    assert_eq!(features.pm25, 150.0);
    assert_eq!(features.temperature, 25.0);
    assert_eq!(features.humidity, 60.0);
    assert_eq!(features.wind_speed, 5.0);
    assert_eq!(features.pressure, 1010.0);
}

#[test]
fn test_calendar_features_from_timestamp() {
    let builder = FeatureBuilder::new();
    let features = builder.build(&full_observation());

    assert_eq!(features.hour, 10.0);
    // 2023-01-01 is a Sunday; Monday = 0
    assert_eq!(features.day_of_week, 6.0);
    assert_eq!(features.month, 1.0);
}

#[test]
fn test_lag_slots_equal_current_pm25_without_history() {
    let builder = FeatureBuilder::new();
    let features = builder.build(&full_observation());

    assert_eq!(features.pm25_lag_1, 150.0);
    assert_eq!(features.pm25_lag_2, 150.0);
    assert_eq!(features.pm25_lag_3, 150.0);
    assert_eq!(features.pm25_lag_4, 150.0);
}

#[test]
fn test_lag_slots_come_from_history_when_supplied() {
    let history = PmHistory::new(vec![110.0, 120.0, 130.0, 140.0]);
    let builder = FeatureBuilder::with_history(history);
    let features = builder.build(&full_observation());

    assert_eq!(features.pm25_lag_1, 140.0);
    assert_eq!(features.pm25_lag_2, 130.0);
    assert_eq!(features.pm25_lag_3, 120.0);
    assert_eq!(features.pm25_lag_4, 110.0);
}

#[test]
fn test_short_history_backfills_with_current_pm25() {
    let history = PmHistory::new(vec![120.0, 130.0]);
    let builder = FeatureBuilder::with_history(history);
    let features = builder.build(&full_observation());

    assert_eq!(features.pm25_lag_1, 130.0);
    assert_eq!(features.pm25_lag_2, 120.0);
    // History too short for lags 3 and 4
    assert_eq!(features.pm25_lag_3, 150.0);
    assert_eq!(features.pm25_lag_4, 150.0);
}

#[test]
fn test_missing_field_imputes_batch_mean() {
    let timestamp = Utc.with_ymd_and_hms(2023, 6, 15, 8, 0, 0).unwrap();
    let batch = vec![
        RawObservation::new(100.0, 20.0, 50.0, 4.0, 1000.0, timestamp),
        RawObservation {
            temperature: None,
            ..RawObservation::new(200.0, 30.0, 70.0, 6.0, 1020.0, timestamp)
        },
    ];

    let builder = FeatureBuilder::new();
    let features = builder.build_batch(&batch);

    assert_eq!(features.len(), 2);
    // The only valid temperature in the batch is 20.0
    assert_approx_eq!(features[1].temperature, 20.0);
    assert_approx_eq!(features[1].pm25, 200.0);
}

#[test]
fn test_field_with_no_valid_values_imputes_zero() {
    let timestamp = Utc.with_ymd_and_hms(2023, 6, 15, 8, 0, 0).unwrap();
    let observation = RawObservation {
        wind_speed: None,
        ..RawObservation::new(80.0, 22.0, 55.0, 0.0, 1005.0, timestamp)
    };

    let builder = FeatureBuilder::new();
    let features = builder.build(&observation);

    assert_eq!(features.wind_speed, 0.0);
}

#[test]
fn test_all_fields_missing_imputes_zero_everywhere() {
    let observation = RawObservation {
        pm25: None,
        temperature: None,
        humidity: None,
        wind_speed: None,
        pressure: None,
        timestamp: Some(Utc.with_ymd_and_hms(2023, 6, 15, 8, 0, 0).unwrap()),
    };

    let builder = FeatureBuilder::new();
    let features = builder.build(&observation);

    assert_eq!(features.pm25, 0.0);
    assert_eq!(features.pressure, 0.0);
    // Lags backfill from the imputed pm25
    assert_eq!(features.pm25_lag_1, 0.0);
}

#[test]
fn test_empty_batch_yields_empty_output() {
    let builder = FeatureBuilder::new();
    let features = builder.build_batch(&[]);

    assert!(features.is_empty());
}

#[test]
fn test_single_observation_mean_degenerates_to_value() {
    // In real-time mode the "batch mean" is the single value itself
    let mut observation = full_observation();
    observation.humidity = None;

    let features = FeatureBuilder::new().build(&observation);

    assert_approx_eq!(features.pm25, 150.0);
    // No valid humidity in a batch of one
    assert_eq!(features.humidity, 0.0);
}
