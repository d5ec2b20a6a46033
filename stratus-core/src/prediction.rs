// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Forecast output records.

use crate::reading::HasTimestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One forecast point produced by a retraining cycle.
///
/// A retraining cycle emits a fresh batch of records which supersedes the
/// previous cycle's output; records are never mutated in place.
/// `model_version` identifies the cycle that produced the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// The forecast date, strictly after the last observation
    pub date: DateTime<Utc>,
    /// Predicted temperature in °C
    pub predicted_temperature: f64,
    /// Retraining cycle that produced this record
    pub model_version: u32,
}

impl PredictionRecord {
    /// Create a forecast point.
    #[must_use]
    pub const fn new(date: DateTime<Utc>, predicted_temperature: f64, model_version: u32) -> Self {
        Self {
            date,
            predicted_temperature,
            model_version,
        }
    }
}

impl HasTimestamp for PredictionRecord {
    fn timestamp(&self) -> DateTime<Utc> {
        self.date
    }
}
