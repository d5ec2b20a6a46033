// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sliding-window temperature forecaster.
//!
//! The predictor keeps the most recent temperature samples in a bounded
//! window and fits a [`LinearModel`] over them. Refitting is not per-fetch:
//! a retraining cycle runs once a configurable number of new samples has
//! accumulated (or on the first usable window), and each cycle bumps
//! `model_version`, so a forecast batch always identifies the cycle that
//! produced it and a new batch supersedes the old one wholesale.

use crate::linear::LinearModel;
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use stratus_core::{PredictionRecord, Reading, Result, StratusError};

/// Tuning knobs for the forecaster. None of these is hardcoded downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictorConfig {
    /// Maximum samples kept in the sliding window
    pub window_size: usize,
    /// New samples required to trigger a retraining cycle
    pub retrain_after: usize,
    /// Days ahead to forecast
    pub horizon_days: u32,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            window_size: 100,
            retrain_after: 10,
            horizon_days: 7,
        }
    }
}

/// Linear-trend forecaster over a sliding window of readings.
///
/// # Examples
///
/// ```
/// use stratus_predict::{Predictor, PredictorConfig};
/// use stratus_test_utils::linear_temperature_series;
///
/// let mut predictor = Predictor::new(PredictorConfig::default());
/// predictor.observe(&linear_temperature_series(30, 10.0, 0.5));
///
/// let forecast = predictor.forecast().unwrap();
/// assert_eq!(forecast.len(), 7);
/// assert_eq!(forecast[0].model_version, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Predictor {
    config: PredictorConfig,
    window: VecDeque<(DateTime<Utc>, f64)>,
    new_samples: usize,
    model: Option<LinearModel>,
    version: u32,
}

impl Predictor {
    /// Create a predictor with the given configuration.
    #[must_use]
    pub fn new(config: PredictorConfig) -> Self {
        Self {
            config,
            window: VecDeque::with_capacity(config.window_size),
            new_samples: 0,
            model: None,
            version: 0,
        }
    }

    /// The configuration this predictor was built with.
    #[must_use]
    pub const fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// The retraining cycle of the current model; 0 before the first fit.
    #[must_use]
    pub const fn model_version(&self) -> u32 {
        self.version
    }

    /// Number of samples currently in the window.
    #[must_use]
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Ingest a fetched batch, retraining if enough new samples arrived.
    ///
    /// Readings without a temperature are skipped, as are samples not newer
    /// than the newest one already held - a refresh typically re-delivers
    /// most of the previous batch, and only the genuinely new tail counts
    /// toward the retraining threshold. Returns the number of samples
    /// accepted.
    pub fn observe(&mut self, readings: &[Reading]) -> usize {
        let mut accepted = 0;
        for reading in readings {
            let Some(temperature) = reading.temperature else {
                continue;
            };
            if let Some(&(last, _)) = self.window.back() {
                if reading.timestamp <= last {
                    continue;
                }
            }
            self.window.push_back((reading.timestamp, temperature));
            if self.window.len() > self.config.window_size {
                self.window.pop_front();
            }
            accepted += 1;
        }

        self.new_samples += accepted;
        if self.model.is_none() || self.new_samples >= self.config.retrain_after {
            self.retrain();
        }
        accepted
    }

    /// Forecast `horizon_days` daily values past the last observation.
    ///
    /// Records are dated strictly after the newest sample and all carry the
    /// current `model_version`; the next retraining cycle's output
    /// supersedes them.
    ///
    /// # Errors
    ///
    /// `InsufficientData` when no model could be fitted yet.
    pub fn forecast(&self) -> Result<Vec<PredictionRecord>> {
        let model = self.model.ok_or_else(|| {
            StratusError::insufficient_data(2, self.window.len().min(2))
        })?;
        let (origin, last) = match (self.window.front(), self.window.back()) {
            (Some(&(origin, _)), Some(&(last, _))) => (origin, last),
            // A fitted model implies a populated window.
            _ => return Err(StratusError::insufficient_data(2, 0)),
        };

        let mut records = Vec::with_capacity(self.config.horizon_days as usize);
        for day in 1..=i64::from(self.config.horizon_days) {
            let date = last + Duration::days(day);
            let x = day_offset(origin, date);
            records.push(PredictionRecord::new(date, model.predict(x), self.version));
        }
        Ok(records)
    }

    fn retrain(&mut self) {
        let Some(&(origin, _)) = self.window.front() else {
            return;
        };
        let points: Vec<(f64, f64)> = self
            .window
            .iter()
            .map(|&(ts, temperature)| (day_offset(origin, ts), temperature))
            .collect();

        match LinearModel::fit(&points) {
            Ok(model) => {
                self.model = Some(model);
                self.version += 1;
                self.new_samples = 0;
                tracing::debug!(
                    version = self.version,
                    samples = points.len(),
                    slope = model.slope,
                    "model retrained"
                );
            }
            Err(e) => {
                // Window still too thin; keep whatever model we had.
                tracing::debug!(%e, "skipping retraining cycle");
            }
        }
    }
}

/// Fractional days between `origin` and `ts` - the model's x axis.
fn day_offset(origin: DateTime<Utc>, ts: DateTime<Utc>) -> f64 {
    (ts - origin).num_seconds() as f64 / 86_400.0
}
