// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{TimeZone, Utc};
use stratus_core::{
    strictly_increasing, SourceTag, PLAUSIBLE_HUMIDITY_PCT, PLAUSIBLE_TEMPERATURE_C,
};
use stratus_sources::{ReadingSource, Simulator};

fn fixed_end() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
}

#[test]
fn test_series_is_strictly_increasing() {
    // Act
    let series = Simulator::default().generate_until(fixed_end(), 365);

    // Assert
    assert_eq!(series.len(), 365);
    assert!(strictly_increasing(&series));
    assert_eq!(series.last().unwrap().timestamp, fixed_end());
}

#[test]
fn test_series_stays_in_plausible_physical_range() {
    // Arrange - a full year hits both seasonal extremes, and anomalies are
    // frequent enough at 10% to appear in the sample
    let series = Simulator::default().generate_until(fixed_end(), 365);

    // Assert
    for reading in &series {
        let temperature = reading.temperature.expect("simulator always emits temperature");
        let humidity = reading.humidity.expect("simulator always emits humidity");
        assert!(
            PLAUSIBLE_TEMPERATURE_C.contains(&temperature),
            "temperature {temperature} outside plausible range"
        );
        assert!(
            PLAUSIBLE_HUMIDITY_PCT.contains(&humidity),
            "humidity {humidity} outside valid range"
        );
        assert!(reading.pressure.is_some());
        assert_eq!(reading.source, SourceTag::Simulated);
    }
}

#[test]
fn test_equal_seeds_give_equal_series() {
    // Act
    let first = Simulator::new(7).generate_until(fixed_end(), 50);
    let second = Simulator::new(7).generate_until(fixed_end(), 50);
    let different = Simulator::new(8).generate_until(fixed_end(), 50);

    // Assert
    assert_eq!(first, second);
    assert_ne!(first, different);
}

#[test]
fn test_anomaly_probability_shapes_the_series() {
    // Arrange
    let calm = Simulator::new(42)
        .with_anomaly_probability(0.0)
        .generate_until(fixed_end(), 365);
    let spiky = Simulator::new(42)
        .with_anomaly_probability(1.0)
        .generate_until(fixed_end(), 365);

    // Assert - without anomalies, day-to-day movement is cycle + noise only
    for pair in calm.windows(2) {
        let step = (pair[1].temperature.unwrap() - pair[0].temperature.unwrap()).abs();
        assert!(step < 25.0, "spike of {step} °C with anomalies disabled");
    }

    // ...while forcing an anomaly every day visibly changes the series
    assert_ne!(calm, spiky);
}

#[tokio::test]
async fn test_simulator_is_an_infallible_source() -> anyhow::Result<()> {
    // Arrange
    let simulator = Simulator::default();

    // Act
    let batch = simulator.fetch(30).await?;

    // Assert
    assert_eq!(batch.len(), 30);
    assert!(strictly_increasing(&batch));
    assert_eq!(simulator.tag(), SourceTag::Simulated);

    Ok(())
}
