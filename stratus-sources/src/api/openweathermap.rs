// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! OpenWeatherMap connector.
//!
//! The free tier only exposes current conditions, so a fetch reads the
//! current observation and synthesizes a `days`-long daily history around
//! it: a small seasonal factor plus seeded noise, oldest first. Metrics the
//! provider omits stay `None` through the synthesized batch.

use crate::api::{build_client, fetch_text};
use crate::source::{normalize_batch, ReadingSource};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration, Utc};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use serde::Deserialize;
use stratus_core::{
    ApiProvider, Reading, Result, SourceConfig, SourceTag, StratusError, ENV_API_KEY,
    PLAUSIBLE_HUMIDITY_PCT,
};

/// Production endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Wire schema of the current-conditions endpoint (the fields we consume).
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    /// The `main` block with the numeric observations
    pub main: MainConditions,
    /// Resolved city name
    #[serde(default)]
    pub name: Option<String>,
}

/// The `main` block; any field may be absent from a payload.
#[derive(Debug, Clone, Deserialize)]
pub struct MainConditions {
    /// Temperature in °C (metric units requested)
    #[serde(default)]
    pub temp: Option<f64>,
    /// Relative humidity in %
    #[serde(default)]
    pub humidity: Option<f64>,
    /// Pressure in hPa
    #[serde(default)]
    pub pressure: Option<f64>,
}

/// Connector for the OpenWeatherMap current-conditions API.
pub struct OpenWeatherMapSource {
    client: reqwest::Client,
    api_key: String,
    location: String,
    base_url: String,
    seed: u64,
}

impl OpenWeatherMapSource {
    /// Build the connector from the process configuration.
    ///
    /// # Errors
    ///
    /// `ConfigurationMissing` when no API key is configured.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| StratusError::configuration_missing(ENV_API_KEY))?;

        Ok(Self {
            client: build_client(config.request_timeout)?,
            api_key,
            location: config.location.clone(),
            base_url: config
                .api_base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            seed: 42,
        })
    }

    /// Override the endpoint root (tests point this at a local address).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Decode a current-conditions payload.
    ///
    /// # Errors
    ///
    /// `MalformedResponse` when the body is not the expected schema.
    pub fn parse_current(body: &str) -> Result<CurrentConditions> {
        serde_json::from_str(body)
            .map_err(|e| StratusError::malformed_response(format!("openweathermap: {e}")))
    }

    /// Expand one current observation into a daily history ending at `end`.
    ///
    /// Each synthesized day wobbles around the observation with a seasonal
    /// factor plus Gaussian noise; a metric absent from the observation is
    /// absent from every synthesized reading.
    #[must_use]
    pub fn synthesize_history(
        current: &CurrentConditions,
        end: DateTime<Utc>,
        days: u32,
        seed: u64,
    ) -> Vec<Reading> {
        let mut rng = StdRng::seed_from_u64(seed);
        let normal = StandardNormal;
        let mut readings = Vec::with_capacity(days as usize);

        for offset in (0..i64::from(days)).rev() {
            let date = end - Duration::days(offset);
            let day_of_year = f64::from(date.ordinal());
            let seasonal = 2.0 * (2.0 * std::f64::consts::PI * day_of_year / 365.0).sin();

            let mut reading = Reading::new(date, SourceTag::Api(ApiProvider::OpenWeatherMap));
            if let Some(temp) = current.main.temp {
                let wobble: f64 = normal.sample(&mut rng);
                reading = reading.with_temperature(temp + seasonal + 2.0 * wobble);
            }
            if let Some(humidity) = current.main.humidity {
                let wobble: f64 = normal.sample(&mut rng);
                reading = reading.with_humidity((humidity - 0.5 * seasonal + 5.0 * wobble).clamp(
                    *PLAUSIBLE_HUMIDITY_PCT.start(),
                    *PLAUSIBLE_HUMIDITY_PCT.end(),
                ));
            }
            if let Some(pressure) = current.main.pressure {
                let wobble: f64 = normal.sample(&mut rng);
                reading = reading.with_pressure(pressure + 2.0 * wobble);
            }
            readings.push(reading);
        }

        normalize_batch(readings)
    }
}

#[async_trait]
impl ReadingSource for OpenWeatherMapSource {
    fn tag(&self) -> SourceTag {
        SourceTag::Api(ApiProvider::OpenWeatherMap)
    }

    async fn fetch(&self, days: u32) -> Result<Vec<Reading>> {
        let url = format!("{}/weather", self.base_url);
        let query = [
            ("q", self.location.clone()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ];

        let body = fetch_text(&self.client, &url, &query).await?;
        let current = Self::parse_current(&body)?;
        tracing::debug!(
            location = current.name.as_deref().unwrap_or(&self.location),
            "openweathermap current conditions received"
        );

        Ok(Self::synthesize_history(
            &current,
            Utc::now(),
            days,
            self.seed,
        ))
    }
}
