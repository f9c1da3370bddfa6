use air_forecast::error::ForecastError;
use std::io;

#[test]
fn test_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let error = ForecastError::from(io_error);

    assert!(matches!(error, ForecastError::Io(_)));
}

#[test]
fn test_error_display() {
    let error = ForecastError::Acquisition("network timeout".to_string());
    let error_string = format!("{}", error);

    assert!(error_string.contains("Acquisition error"));
    assert!(error_string.contains("network timeout"));

    let error = ForecastError::UnknownHorizon(24);
    assert_eq!(format!("{}", error), "Unknown forecast horizon: 24h");
}

#[test]
fn test_acquisition_message_is_verbatim() {
    let error = ForecastError::Acquisition("network timeout".to_string());
    assert_eq!(error.acquisition_message(), "network timeout");

    // Non-acquisition errors fall back to the display string
    let error = ForecastError::Data("bad payload".to_string());
    assert_eq!(error.acquisition_message(), "Data error: bad payload");
}
