// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::{TimeZone, Utc};
use stratus_core::{strictly_increasing, ApiProvider, Reading, SourceTag};

fn at_day(day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, 0, 0, 0).unwrap()
}

#[test]
fn test_strictly_increasing_accepts_ordered_batch() {
    // Arrange
    let batch = vec![
        Reading::new(at_day(1), SourceTag::Simulated),
        Reading::new(at_day(2), SourceTag::Simulated),
        Reading::new(at_day(3), SourceTag::Simulated),
    ];

    // Assert
    assert!(strictly_increasing(&batch));
}

#[test]
fn test_strictly_increasing_rejects_duplicates_and_disorder() {
    // Arrange
    let duplicated = vec![
        Reading::new(at_day(1), SourceTag::Simulated),
        Reading::new(at_day(1), SourceTag::Simulated),
    ];
    let reversed = vec![
        Reading::new(at_day(2), SourceTag::Simulated),
        Reading::new(at_day(1), SourceTag::Simulated),
    ];

    // Assert
    assert!(!strictly_increasing(&duplicated));
    assert!(!strictly_increasing(&reversed));
}

#[test]
fn test_strictly_increasing_trivial_batches() {
    // Assert
    assert!(strictly_increasing::<Reading>(&[]));
    assert!(strictly_increasing(&[Reading::new(
        at_day(1),
        SourceTag::File
    )]));
}

#[test]
fn test_source_tag_string_round_trip() -> anyhow::Result<()> {
    // Arrange
    let tags = [
        SourceTag::Simulated,
        SourceTag::File,
        SourceTag::Api(ApiProvider::OpenWeatherMap),
        SourceTag::Api(ApiProvider::VisualCrossing),
        SourceTag::Api(ApiProvider::ThingSpeak),
    ];

    for tag in tags {
        // Act
        let parsed: SourceTag = tag.to_string().parse().map_err(anyhow::Error::msg)?;

        // Assert
        assert_eq!(parsed, tag);
    }

    Ok(())
}

#[test]
fn test_missing_fields_stay_none_through_serde() -> anyhow::Result<()> {
    // Arrange - a reading where the provider reported no pressure
    let reading = Reading::new(at_day(5), SourceTag::Api(ApiProvider::VisualCrossing))
        .with_temperature(18.2)
        .with_humidity(71.0);

    // Act
    let json = serde_json::to_string(&reading)?;
    let back: Reading = serde_json::from_str(&json)?;

    // Assert - None survives the round trip, never a zero default
    assert_eq!(back, reading);
    assert_eq!(back.pressure, None);
    assert!(back.has_any_metric());

    Ok(())
}
