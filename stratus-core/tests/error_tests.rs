// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use stratus_core::StratusError;

#[test]
fn test_every_variant_is_recoverable() {
    // Arrange
    let errors = [
        StratusError::configuration_missing("SENSOR_API_KEY"),
        StratusError::network_failure("connection refused"),
        StratusError::malformed_response("unexpected body"),
        StratusError::insufficient_data(2, 1),
    ];

    // Assert - nothing in the taxonomy is fatal to the process
    for error in errors {
        assert!(error.is_recoverable(), "{error} should be recoverable");
    }
}

#[test]
fn test_source_unavailable_classification() {
    // Assert - the selector falls back on these three
    assert!(StratusError::configuration_missing("SENSOR_API_KEY").is_source_unavailable());
    assert!(StratusError::network_failure("timeout").is_source_unavailable());
    assert!(StratusError::malformed_response("truncated json").is_source_unavailable());

    // ...but a thin dataset is the predictor's concern, not the source's
    assert!(!StratusError::insufficient_data(2, 0).is_source_unavailable());
}

#[test]
fn test_display_names_the_failing_key() {
    // Act
    let message = StratusError::configuration_missing("SENSOR_API_KEY").to_string();

    // Assert
    assert_eq!(message, "configuration missing: SENSOR_API_KEY");
}

#[test]
fn test_errors_are_cloneable_for_outcome_reporting() {
    // Arrange - the selector stores the triggering error in its outcome
    let original = StratusError::network_failure("HTTP 429: rate limited");

    // Act
    let copy = original.clone();

    // Assert
    assert_eq!(copy.to_string(), original.to_string());
}
