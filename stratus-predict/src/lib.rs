// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Regression-based forecasting for the Stratus sensor pipeline.
//!
//! A deliberately small model: ordinary least squares over a sliding window
//! of recent temperature samples, refitted after a configurable number of
//! new samples. Degenerate windows (fewer than 2 distinct samples) refuse
//! to fit with [`StratusError::InsufficientData`](stratus_core::StratusError)
//! instead of surfacing a numeric error.
//!
//! # Examples
//!
//! ```
//! use stratus_predict::{LinearModel, Predictor, PredictorConfig};
//!
//! // The model itself is just a line fit.
//! let model = LinearModel::fit(&[(0.0, 20.0), (1.0, 20.5), (2.0, 21.0)]).unwrap();
//! assert!((model.predict(3.0) - 21.5).abs() < 1e-9);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod linear;
pub mod predictor;

pub use linear::LinearModel;
pub use predictor::{Predictor, PredictorConfig};
