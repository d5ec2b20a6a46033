// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core domain types for the Stratus sensor-data pipeline.
//!
//! This crate defines what flows through the pipeline and nothing about how
//! it is produced:
//!
//! - [`Reading`] - one normalized sensor/weather sample with nullable metrics
//! - [`PredictionRecord`] - one forecast point, versioned per retraining cycle
//! - [`SourceConfig`] - process-wide configuration read once from the
//!   environment
//! - [`StratusError`] - the pipeline's failure taxonomy, every variant
//!   recoverable
//!
//! Producers live in `stratus-sources`, the forecaster in `stratus-predict`.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use stratus_core::{Reading, SourceTag};
//!
//! let reading = Reading::new(
//!     Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
//!     SourceTag::Simulated,
//! )
//! .with_temperature(21.5)
//! .with_humidity(55.0);
//!
//! assert!(reading.has_any_metric());
//! assert_eq!(reading.pressure, None);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod config;
pub mod error;
pub mod prediction;
pub mod reading;

pub use config::{ApiProvider, SourceConfig, SourceKind};
pub use config::{
    ENV_API_ENDPOINT, ENV_API_KEY, ENV_API_LOCATION, ENV_API_TYPE, ENV_DATA_FILE,
    ENV_DATA_SOURCE, ENV_THINGSPEAK_CHANNEL_ID,
};
pub use error::{Result, StratusError};
pub use prediction::PredictionRecord;
pub use reading::{
    strictly_increasing, HasTimestamp, Reading, SourceTag, PLAUSIBLE_HUMIDITY_PCT,
    PLAUSIBLE_TEMPERATURE_C,
};
