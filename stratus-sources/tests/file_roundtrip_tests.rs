// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use stratus_core::StratusError;
use stratus_sources::{FileStore, ReadingSource, Simulator};
use stratus_test_utils::{day, empty_metric_series, full_reading};

#[test]
fn test_round_trip_preserves_records_and_order() -> anyhow::Result<()> {
    // Arrange
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path().join("readings.csv"));
    let written = vec![
        full_reading(0, 18.5, 62.0, 1012.3),
        full_reading(1, 19.1, 58.5, 1013.0),
        full_reading(2, 17.8, 66.0, 1011.7),
    ];

    // Act
    store.save(&written)?;
    let read = store.load()?;

    // Assert - same N records, same order, same values
    assert_eq!(read, written);

    Ok(())
}

#[test]
fn test_round_trip_preserves_missing_fields_as_none() -> anyhow::Result<()> {
    // Arrange
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path().join("readings.csv"));
    let mut written = empty_metric_series(2);
    written[1] = written[1].clone().with_temperature(21.0);

    // Act
    store.save(&written)?;
    let read = store.load()?;

    // Assert - absent metrics come back as None, never zero
    assert_eq!(read, written);
    assert_eq!(read[0].temperature, None);
    assert_eq!(read[0].humidity, None);
    assert_eq!(read[1].temperature, Some(21.0));

    Ok(())
}

#[test]
fn test_missing_file_is_a_configuration_error() {
    // Arrange
    let store = FileStore::new("/nonexistent/readings.csv");

    // Act
    let error = store.load().unwrap_err();

    // Assert
    assert!(matches!(error, StratusError::ConfigurationMissing { .. }));
    assert!(error.is_source_unavailable());
}

#[test]
fn test_garbage_file_is_a_malformed_error() -> anyhow::Result<()> {
    // Arrange
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("readings.csv");
    std::fs::write(
        &path,
        "timestamp,temperature,humidity,pressure,source\nnot-a-date,a,b,c,simulated\n",
    )?;

    // Act
    let error = FileStore::new(&path).load().unwrap_err();

    // Assert
    assert!(matches!(error, StratusError::MalformedResponse { .. }));

    Ok(())
}

#[test]
fn test_load_normalizes_disorder_on_disk() -> anyhow::Result<()> {
    // Arrange - a hand-edited file with shuffled and duplicated rows
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path().join("readings.csv"));
    let shuffled = vec![
        full_reading(2, 17.8, 66.0, 1011.7),
        full_reading(0, 18.5, 62.0, 1012.3),
        full_reading(2, 99.0, 99.0, 9999.0),
        full_reading(1, 19.1, 58.5, 1013.0),
    ];
    store.save(&shuffled)?;

    // Act
    let read = store.load()?;

    // Assert - sorted oldest first, first occurrence wins on a tie
    assert_eq!(read.len(), 3);
    assert_eq!(
        read.iter().map(|r| r.timestamp).collect::<Vec<_>>(),
        vec![day(0), day(1), day(2)]
    );
    assert_eq!(read[2].temperature, Some(17.8));

    Ok(())
}

#[tokio::test]
async fn test_fetch_limits_to_the_most_recent_days() -> anyhow::Result<()> {
    // Arrange - persist a 30-day simulated history
    let dir = tempfile::tempdir()?;
    let store = FileStore::new(dir.path().join("readings.csv"));
    let history = Simulator::default().generate(30);
    store.save(&history)?;

    // Act
    let batch = store.fetch(7).await?;

    // Assert - only the tail is served
    assert_eq!(batch.len(), 7);
    assert_eq!(batch.last(), history.last());

    Ok(())
}
