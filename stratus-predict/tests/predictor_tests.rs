// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use stratus_core::{strictly_increasing, StratusError};
use stratus_predict::{LinearModel, Predictor, PredictorConfig};
use stratus_test_utils::{
    constant_temperature_series, empty_metric_series, linear_temperature_series,
};

const TOLERANCE: f64 = 1e-6;

#[test]
fn test_fewer_than_two_samples_is_insufficient_data() {
    // Arrange
    let mut predictor = Predictor::new(PredictorConfig::default());
    predictor.observe(&linear_temperature_series(1, 20.0, 0.5));

    // Act
    let error = predictor.forecast().unwrap_err();

    // Assert - a refusal, not a numeric error
    assert!(matches!(error, StratusError::InsufficientData { .. }));
    assert_eq!(predictor.model_version(), 0);
}

#[test]
fn test_no_samples_is_insufficient_data() {
    // Arrange
    let predictor = Predictor::new(PredictorConfig::default());

    // Act / Assert
    assert!(matches!(
        predictor.forecast(),
        Err(StratusError::InsufficientData { .. })
    ));
}

#[test]
fn test_linear_series_forecasts_on_the_trend() -> anyhow::Result<()> {
    // Arrange - temperature climbs exactly 0.5 °C per day from 10.0
    let series = linear_temperature_series(30, 10.0, 0.5);
    let mut predictor = Predictor::new(PredictorConfig::default());
    predictor.observe(&series);

    // Act
    let forecast = predictor.forecast()?;

    // Assert - the next values continue the line within float tolerance
    assert_eq!(forecast.len(), 7);
    assert!(strictly_increasing(&forecast));
    for (i, record) in forecast.iter().enumerate() {
        let expected = 10.0 + 0.5 * (30 + i) as f64;
        assert!(
            (record.predicted_temperature - expected).abs() < TOLERANCE,
            "day {i}: predicted {} expected {expected}",
            record.predicted_temperature
        );
    }

    Ok(())
}

#[test]
fn test_forecast_dates_follow_the_last_observation() -> anyhow::Result<()> {
    // Arrange
    let series = linear_temperature_series(10, 15.0, 0.1);
    let last = series.last().unwrap().timestamp;
    let mut predictor = Predictor::new(PredictorConfig::default());
    predictor.observe(&series);

    // Act
    let forecast = predictor.forecast()?;

    // Assert - strictly after the newest sample, one per day
    assert_eq!(forecast[0].date, last + chrono::Duration::days(1));
    assert_eq!(
        forecast.last().unwrap().date,
        last + chrono::Duration::days(7)
    );

    Ok(())
}

#[test]
fn test_horizon_is_configurable() -> anyhow::Result<()> {
    // Arrange
    let config = PredictorConfig {
        horizon_days: 3,
        ..PredictorConfig::default()
    };
    let mut predictor = Predictor::new(config);
    predictor.observe(&linear_temperature_series(10, 15.0, 0.1));

    // Act / Assert
    assert_eq!(predictor.forecast()?.len(), 3);

    Ok(())
}

#[test]
fn test_retraining_waits_for_enough_new_samples() {
    // Arrange
    let config = PredictorConfig {
        retrain_after: 5,
        ..PredictorConfig::default()
    };
    let mut predictor = Predictor::new(config);
    let series = linear_temperature_series(20, 10.0, 0.5);

    // Act - first usable window fits immediately
    predictor.observe(&series[..3]);
    assert_eq!(predictor.model_version(), 1);

    // Three new samples: under the threshold, no retraining cycle
    predictor.observe(&series[3..6]);
    assert_eq!(predictor.model_version(), 1);

    // Two more reach the threshold of five
    predictor.observe(&series[6..8]);
    assert_eq!(predictor.model_version(), 2);
}

#[test]
fn test_new_batch_supersedes_the_previous_one() -> anyhow::Result<()> {
    // Arrange
    let config = PredictorConfig {
        retrain_after: 5,
        ..PredictorConfig::default()
    };
    let mut predictor = Predictor::new(config);
    let series = linear_temperature_series(40, 10.0, 0.5);

    predictor.observe(&series[..10]);
    let first = predictor.forecast()?;

    // Act - enough new data for a retraining cycle
    predictor.observe(&series[10..20]);
    let second = predictor.forecast()?;

    // Assert - a fresh batch with a higher version, not a mutation
    assert_eq!(first[0].model_version, 1);
    assert_eq!(second[0].model_version, 2);
    assert!(second[0].date > first[0].date);

    Ok(())
}

#[test]
fn test_redelivered_samples_do_not_count_as_new() {
    // Arrange - every refresh re-delivers the full window plus one new day
    let config = PredictorConfig {
        retrain_after: 100,
        ..PredictorConfig::default()
    };
    let mut predictor = Predictor::new(config);
    let series = linear_temperature_series(12, 10.0, 0.5);

    predictor.observe(&series[..10]);
    assert_eq!(predictor.window_len(), 10);

    // Act - overlap is skipped, only the genuinely new tail is ingested
    let accepted = predictor.observe(&series);

    // Assert
    assert_eq!(accepted, 2);
    assert_eq!(predictor.window_len(), 12);
}

#[test]
fn test_readings_without_temperature_are_skipped() {
    // Arrange
    let mut predictor = Predictor::new(PredictorConfig::default());

    // Act
    let accepted = predictor.observe(&empty_metric_series(5));

    // Assert - nothing to learn from, and no phantom zero samples
    assert_eq!(accepted, 0);
    assert!(matches!(
        predictor.forecast(),
        Err(StratusError::InsufficientData { .. })
    ));
}

#[test]
fn test_window_is_bounded() {
    // Arrange
    let config = PredictorConfig {
        window_size: 10,
        ..PredictorConfig::default()
    };
    let mut predictor = Predictor::new(config);

    // Act
    predictor.observe(&linear_temperature_series(50, 10.0, 0.5));

    // Assert - only the most recent samples are retained
    assert_eq!(predictor.window_len(), 10);
}

#[test]
fn test_constant_series_forecasts_flat() -> anyhow::Result<()> {
    // Arrange - distinct timestamps, identical values: slope 0 is a valid fit
    let mut predictor = Predictor::new(PredictorConfig::default());
    predictor.observe(&constant_temperature_series(10, 21.5));

    // Act
    let forecast = predictor.forecast()?;

    // Assert
    for record in forecast {
        assert!((record.predicted_temperature - 21.5).abs() < TOLERANCE);
    }

    Ok(())
}

#[test]
fn test_vertical_cluster_refuses_to_fit() {
    // Arrange - many samples, all at the same x
    let points: Vec<(f64, f64)> = (0..10).map(|i| (1.0, f64::from(i))).collect();

    // Act
    let error = LinearModel::fit(&points).unwrap_err();

    // Assert
    assert!(matches!(
        error,
        StratusError::InsufficientData { needed: 2, got: 1 }
    ));
}
