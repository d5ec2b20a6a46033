// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synthetic daily series with seasonal structure.
//!
//! The simulator is the pipeline's producer of last resort: it cannot fail,
//! so the selector can always substitute it for an unavailable source. The
//! generated series mimics a mid-latitude climate - an annual temperature
//! cycle, anti-correlated humidity, noisy pressure around standard sea
//! level - with occasional temperature anomalies so downstream charts and
//! models see something other than a clean sinusoid.

use crate::source::ReadingSource;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;
use stratus_core::{
    Reading, Result, SourceTag, PLAUSIBLE_HUMIDITY_PCT, PLAUSIBLE_TEMPERATURE_C,
};

const BASE_TEMPERATURE_C: f64 = 25.0;
const ANNUAL_AMPLITUDE_C: f64 = 10.0;
const TEMPERATURE_SIGMA: f64 = 3.0;
const BASE_HUMIDITY_PCT: f64 = 60.0;
const HUMIDITY_SIGMA: f64 = 5.0;
const BASE_PRESSURE_HPA: f64 = 1013.0;
const PRESSURE_SIGMA: f64 = 3.0;
const ANOMALY_MAGNITUDE_C: f64 = 10.0;

/// Deterministic generator of simulated sensor readings.
///
/// Equal seeds produce equal series for the same end date and length.
#[derive(Debug, Clone)]
pub struct Simulator {
    seed: u64,
    anomaly_probability: f64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            seed: 42,
            anomaly_probability: 0.1,
        }
    }
}

impl Simulator {
    /// Create a simulator with the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the per-day probability of a ±10 °C anomaly.
    #[must_use]
    pub fn with_anomaly_probability(mut self, probability: f64) -> Self {
        self.anomaly_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Generate `days` daily readings ending now, oldest first.
    #[must_use]
    pub fn generate(&self, days: u32) -> Vec<Reading> {
        self.generate_until(Utc::now(), days)
    }

    /// Generate `days` daily readings ending at `end`, oldest first.
    ///
    /// Timestamps step by exactly one day, so the batch is strictly
    /// increasing by construction. Temperature is clamped to the plausible
    /// physical range and humidity to 0–100 %.
    #[must_use]
    pub fn generate_until(&self, end: DateTime<Utc>, days: u32) -> Vec<Reading> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut readings = Vec::with_capacity(days as usize);

        for offset in (0..i64::from(days)).rev() {
            let date = end - Duration::days(offset);
            let day_of_year = f64::from(date.ordinal());
            let annual_cycle =
                ANNUAL_AMPLITUDE_C * (2.0 * std::f64::consts::PI * day_of_year / 365.0).sin();

            let mut temperature =
                BASE_TEMPERATURE_C + annual_cycle + TEMPERATURE_SIGMA * noise(&mut rng);

            // Humidity runs against the seasonal cycle but tracks temperature
            // noise, matching the correlation in the recorded datasets.
            let humidity = BASE_HUMIDITY_PCT - 5.0 * annual_cycle
                + HUMIDITY_SIGMA * noise(&mut rng)
                + 0.2 * temperature;

            let pressure = BASE_PRESSURE_HPA + PRESSURE_SIGMA * noise(&mut rng);

            if rng.random::<f64>() < self.anomaly_probability {
                let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
                temperature += sign * ANOMALY_MAGNITUDE_C;
            }

            readings.push(
                Reading::new(date, SourceTag::Simulated)
                    .with_temperature(temperature.clamp(
                        *PLAUSIBLE_TEMPERATURE_C.start(),
                        *PLAUSIBLE_TEMPERATURE_C.end(),
                    ))
                    .with_humidity(humidity.clamp(
                        *PLAUSIBLE_HUMIDITY_PCT.start(),
                        *PLAUSIBLE_HUMIDITY_PCT.end(),
                    ))
                    .with_pressure(pressure),
            );
        }

        readings
    }
}

#[async_trait]
impl ReadingSource for Simulator {
    fn tag(&self) -> SourceTag {
        SourceTag::Simulated
    }

    async fn fetch(&self, days: u32) -> Result<Vec<Reading>> {
        Ok(self.generate(days))
    }
}

fn noise(rng: &mut StdRng) -> f64 {
    rng.sample(StandardNormal)
}
