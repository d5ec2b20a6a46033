// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Stratus sensor pipeline.
//!
//! This module provides the error handling system shared by every pipeline
//! component. It defines a root [`StratusError`] type with one variant per
//! failure mode, allowing callers to classify errors without inspecting
//! message strings.
//!
//! None of the variants is fatal to a running process: source failures are
//! recovered by falling back to simulated data, and a predictor that cannot
//! fit a model simply skips the forecast.
//!
//! # Examples
//!
//! ```
//! use stratus_core::{Result, StratusError};
//!
//! fn fetch_remote() -> Result<()> {
//!     Err(StratusError::network_failure("connection refused"))
//! }
//!
//! let err = fetch_remote().unwrap_err();
//! assert!(err.is_source_unavailable());
//! ```

/// Root error type for all Stratus operations.
///
/// The variants mirror the failure taxonomy of the ingestion pipeline:
/// configuration problems, transport problems, undecodable payloads, and
/// datasets too small to fit a model.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StratusError {
    /// A required configuration value is absent or unusable.
    ///
    /// `key` names the environment variable (or logical setting) that was
    /// expected, e.g. `SENSOR_API_KEY`.
    #[error("configuration missing: {key}")]
    ConfigurationMissing {
        /// The environment variable or setting that was expected
        key: String,
    },

    /// The remote endpoint could not be reached or answered with a
    /// non-success status.
    ///
    /// Rate limiting (HTTP 429) is reported through this variant with the
    /// status in the context.
    #[error("network failure: {context}")]
    NetworkFailure {
        /// Description of what went wrong on the wire
        context: String,
    },

    /// A payload was received (or a file was read) but could not be decoded
    /// into readings.
    #[error("malformed response: {context}")]
    MalformedResponse {
        /// Description of the decoding failure
        context: String,
    },

    /// Too few samples to fit a model.
    ///
    /// Emitted by the predictor instead of a numeric error (NaN slope,
    /// division by zero) when the window holds fewer than the required
    /// number of distinct samples.
    #[error("insufficient data: needed {needed} samples, got {got}")]
    InsufficientData {
        /// Minimum number of distinct samples required
        needed: usize,
        /// Number of distinct samples available
        got: usize,
    },
}

impl StratusError {
    /// Create a configuration error naming the missing key.
    pub fn configuration_missing(key: impl Into<String>) -> Self {
        Self::ConfigurationMissing { key: key.into() }
    }

    /// Create a network failure with the given context.
    pub fn network_failure(context: impl Into<String>) -> Self {
        Self::NetworkFailure {
            context: context.into(),
        }
    }

    /// Create a malformed-response error with the given context.
    pub fn malformed_response(context: impl Into<String>) -> Self {
        Self::MalformedResponse {
            context: context.into(),
        }
    }

    /// Create an insufficient-data error.
    pub const fn insufficient_data(needed: usize, got: usize) -> Self {
        Self::InsufficientData { needed, got }
    }

    /// Check if this is a recoverable error.
    ///
    /// Every variant in the taxonomy is recovered locally: the source
    /// selector substitutes simulated data, the predictor skips a cycle.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        true
    }

    /// Check if this error marks the configured source as unavailable.
    ///
    /// The source selector treats any such error as the signal to fall back
    /// to the simulator. [`InsufficientData`](Self::InsufficientData) is not
    /// a source condition and is excluded.
    #[must_use]
    pub const fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationMissing { .. }
                | Self::NetworkFailure { .. }
                | Self::MalformedResponse { .. }
        )
    }
}

/// Specialized Result type for Stratus operations.
///
/// # Examples
///
/// ```
/// use stratus_core::Result;
///
/// fn parse() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, StratusError>;
