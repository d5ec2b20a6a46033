// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Deterministic reading-series builders.
//!
//! All series are anchored at a fixed date so tests are reproducible
//! without touching the wall clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use stratus_core::{Reading, SourceTag};

/// The anchor every builder counts days from.
#[must_use]
pub fn anchor_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

/// Daily timestamps starting at the anchor.
#[must_use]
pub fn day(offset: i64) -> DateTime<Utc> {
    anchor_date() + Duration::days(offset)
}

/// `n` daily readings with temperature `start + slope · i`.
#[must_use]
pub fn linear_temperature_series(n: usize, start: f64, slope_per_day: f64) -> Vec<Reading> {
    (0..n)
        .map(|i| {
            Reading::new(day(i as i64), SourceTag::Simulated)
                .with_temperature(start + slope_per_day * i as f64)
        })
        .collect()
}

/// `n` daily readings at a constant temperature.
#[must_use]
pub fn constant_temperature_series(n: usize, value: f64) -> Vec<Reading> {
    linear_temperature_series(n, value, 0.0)
}

/// `n` daily readings carrying no metrics at all.
#[must_use]
pub fn empty_metric_series(n: usize) -> Vec<Reading> {
    (0..n)
        .map(|i| Reading::new(day(i as i64), SourceTag::Simulated))
        .collect()
}

/// A fully-populated reading at the given day offset.
#[must_use]
pub fn full_reading(offset: i64, temperature: f64, humidity: f64, pressure: f64) -> Reading {
    Reading::new(day(offset), SourceTag::File)
        .with_temperature(temperature)
        .with_humidity(humidity)
        .with_pressure(pressure)
}
