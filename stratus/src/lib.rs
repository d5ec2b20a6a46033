// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Stratus
//!
//! Sensor-data ingestion with deterministic fallback and linear forecasting,
//! built as the data backbone for visualization dashboards.
//!
//! ## Overview
//!
//! Stratus feeds a dashboard from one of three producers - a seeded
//! simulator, a persisted CSV dataset, or a live weather/IoT API - selected
//! by environment configuration. The selector substitutes the simulator for
//! any unavailable source, so a refresh cycle always yields data; the
//! predictor fits a linear trend over a sliding window of readings and
//! forecasts the next few days, retraining as new samples accumulate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stratus::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let selector = SourceSelector::new(SourceConfig::from_env());
//!     let mut predictor = Predictor::new(PredictorConfig::default());
//!
//!     // One refresh cycle: fetch, observe, forecast.
//!     let outcome = selector.fetch(100).await;
//!     predictor.observe(&outcome.readings);
//!
//!     match predictor.forecast() {
//!         Ok(forecast) => println!("{} points forecast", forecast.len()),
//!         Err(e) => println!("forecast skipped: {e}"),
//!     }
//! }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

// Re-export core types
pub use stratus_core::{
    strictly_increasing, ApiProvider, HasTimestamp, PredictionRecord, Reading, Result,
    SourceConfig, SourceKind, SourceTag, StratusError,
};

// Re-export the producers and the selector
pub use stratus_sources::{
    normalize_batch, FetchOutcome, FileStore, OpenWeatherMapSource, ReadingSource, Simulator,
    SourceSelector, ThingSpeakSource, VisualCrossingSource,
};

// Re-export the forecaster
pub use stratus_predict::{LinearModel, Predictor, PredictorConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use stratus_core::{
        PredictionRecord, Reading, Result, SourceConfig, SourceKind, SourceTag, StratusError,
    };
    pub use stratus_predict::{Predictor, PredictorConfig};
    pub use stratus_sources::{FetchOutcome, ReadingSource, Simulator, SourceSelector};
}
