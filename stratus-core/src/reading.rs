// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The normalized sensor sample and its ordering invariant.
//!
//! Every producer (simulator, file store, API connector) emits [`Reading`]
//! values. Missing fields stay `None` - they are never defaulted to zero,
//! which would corrupt downstream statistics.

use crate::config::ApiProvider;
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Physically plausible temperature range in °C.
///
/// Simulated series are clamped to this range, and tests use it to bound
/// generated data.
pub const PLAUSIBLE_TEMPERATURE_C: RangeInclusive<f64> = -40.0..=50.0;

/// Valid relative-humidity range in percent.
pub const PLAUSIBLE_HUMIDITY_PCT: RangeInclusive<f64> = 0.0..=100.0;

/// A trait for types that have a timestamp value.
///
/// Batch invariants (see [`strictly_increasing`]) and the predictor's
/// window bookkeeping only need to read the ordering key, so this is the
/// single seam they depend on.
pub trait HasTimestamp {
    /// Returns the timestamp for this item.
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Returns `true` if the batch is strictly increasing in timestamp.
///
/// An empty or single-element batch is trivially ordered. Producers must
/// normalize their output so this holds for every fetch batch.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use stratus_core::{strictly_increasing, Reading, SourceTag};
///
/// let batch = vec![
///     Reading::new(Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(), SourceTag::Simulated),
///     Reading::new(Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap(), SourceTag::Simulated),
/// ];
/// assert!(strictly_increasing(&batch));
/// ```
pub fn strictly_increasing<T: HasTimestamp>(items: &[T]) -> bool {
    items
        .windows(2)
        .all(|pair| pair[0].timestamp() < pair[1].timestamp())
}

/// Identifies which producer actually served a reading.
///
/// After a fallback the tag differs from the configured source; the
/// presentation layer uses this as its "using simulated data" indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTag {
    /// Synthetic data from the built-in simulator
    Simulated,
    /// Rows loaded from the persisted CSV dataset
    File,
    /// Live data from a third-party API
    Api(ApiProvider),
}

impl SourceTag {
    /// Stable string form, also used as the CSV column value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simulated => "simulated",
            Self::File => "file",
            Self::Api(provider) => provider.as_str(),
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceTag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "simulated" => Ok(Self::Simulated),
            "file" => Ok(Self::File),
            other => ApiProvider::from_str(other).map(Self::Api),
        }
    }
}

// Serialized as a bare string so readings stay flat in CSV and JSON alike.
impl Serialize for SourceTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SourceTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// One normalized sensor/weather sample.
///
/// Field semantics:
/// - `timestamp` - capture time in UTC, strictly increasing within a batch
/// - `temperature` - °C
/// - `humidity` - relative humidity, %
/// - `pressure` - hPa
/// - `source` - the producer that served this sample
///
/// A provider lacking a metric leaves the field `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Capture time, UTC
    pub timestamp: DateTime<Utc>,
    /// Temperature in °C, if reported
    pub temperature: Option<f64>,
    /// Relative humidity in %, if reported
    pub humidity: Option<f64>,
    /// Pressure in hPa, if reported
    pub pressure: Option<f64>,
    /// Producer that served this sample
    pub source: SourceTag,
}

impl Reading {
    /// Create a reading with all metrics absent.
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, source: SourceTag) -> Self {
        Self {
            timestamp,
            temperature: None,
            humidity: None,
            pressure: None,
            source,
        }
    }

    /// Set the temperature, consuming and returning the reading.
    #[must_use]
    pub const fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    /// Set the humidity, consuming and returning the reading.
    #[must_use]
    pub const fn with_humidity(mut self, percent: f64) -> Self {
        self.humidity = Some(percent);
        self
    }

    /// Set the pressure, consuming and returning the reading.
    #[must_use]
    pub const fn with_pressure(mut self, hectopascal: f64) -> Self {
        self.pressure = Some(hectopascal);
        self
    }

    /// Returns `true` if at least one metric is present.
    #[must_use]
    pub const fn has_any_metric(&self) -> bool {
        self.temperature.is_some() || self.humidity.is_some() || self.pressure.is_some()
    }
}

impl HasTimestamp for Reading {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
