// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the Stratus workspace.
//!
//! This crate provides deterministic reading-series builders and mock
//! producers for testing source selection and forecasting. It is designed
//! for use in development and testing only, not for production code.
//!
//! # Key helpers
//!
//! - [`linear_temperature_series`] - a perfectly linear daily series, the
//!   canonical predictor fixture
//! - [`StaticSource`] / [`FailingSource`] - scripted producers for
//!   exercising the selector's fallback policy
//!
//! # Examples
//!
//! ```
//! use stratus_core::strictly_increasing;
//! use stratus_test_utils::linear_temperature_series;
//!
//! let series = linear_temperature_series(10, 20.0, 0.5);
//! assert!(strictly_increasing(&series));
//! assert_eq!(series[4].temperature, Some(22.0));
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod mock_source;
pub mod readings;

pub use mock_source::{FailingSource, StaticSource};
pub use readings::{
    anchor_date, constant_temperature_series, day, empty_metric_series, full_reading,
    linear_temperature_series,
};
