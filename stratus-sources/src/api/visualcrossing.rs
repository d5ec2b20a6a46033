// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Visual Crossing timeline connector.
//!
//! Fetches real daily history over `[end − days, end]`. Days lacking a
//! metric (pressure is commonly absent on this API) normalize to `None`
//! rather than a standard-atmosphere default, which would skew downstream
//! statistics.

use crate::api::{build_client, fetch_text};
use crate::source::{normalize_batch, ReadingSource};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use stratus_core::{
    ApiProvider, Reading, Result, SourceConfig, SourceTag, StratusError, ENV_API_KEY,
};

/// Production endpoint root.
pub const DEFAULT_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

#[derive(Debug, Deserialize)]
struct TimelineResponse {
    #[serde(default)]
    days: Vec<TimelineDay>,
}

#[derive(Debug, Deserialize)]
struct TimelineDay {
    datetime: String,
    #[serde(default)]
    temp: Option<f64>,
    #[serde(default)]
    humidity: Option<f64>,
    #[serde(default)]
    pressure: Option<f64>,
}

/// Connector for the Visual Crossing timeline API.
pub struct VisualCrossingSource {
    client: reqwest::Client,
    api_key: String,
    location: String,
    base_url: String,
}

impl VisualCrossingSource {
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
        })
    }

    /// Override the endpoint root (tests point this at a local address).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Decode a timeline payload into normalized readings.
    ///
    /// # Errors
    ///
    /// `MalformedResponse` when the body is not the expected schema or a
    /// day carries an undecodable date.
    pub fn parse_timeline(body: &str) -> Result<Vec<Reading>> {
        let timeline: TimelineResponse = serde_json::from_str(body)
            .map_err(|e| StratusError::malformed_response(format!("visualcrossing: {e}")))?;

        let mut readings = Vec::with_capacity(timeline.days.len());
        for day in timeline.days {
            let date = NaiveDate::parse_from_str(&day.datetime, "%Y-%m-%d").map_err(|e| {
                StratusError::malformed_response(format!(
                    "visualcrossing: bad datetime {:?}: {e}",
                    day.datetime
                ))
            })?;
            let timestamp = date
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| {
                    StratusError::malformed_response(format!(
                        "visualcrossing: bad datetime {:?}",
                        day.datetime
                    ))
                })?
                .and_utc();

            let mut reading = Reading::new(timestamp, SourceTag::Api(ApiProvider::VisualCrossing));
            if let Some(temp) = day.temp {
                reading = reading.with_temperature(temp);
            }
            if let Some(humidity) = day.humidity {
                reading = reading.with_humidity(humidity);
            }
            if let Some(pressure) = day.pressure {
                reading = reading.with_pressure(pressure);
            }
            readings.push(reading);
        }

        Ok(normalize_batch(readings))
    }
}

#[async_trait]
impl ReadingSource for VisualCrossingSource {
    fn tag(&self) -> SourceTag {
        SourceTag::Api(ApiProvider::VisualCrossing)
    }

    async fn fetch(&self, days: u32) -> Result<Vec<Reading>> {
        let end = Utc::now().date_naive();
        let start = end - chrono::Duration::days(i64::from(days));
        let url = format!(
            "{}/{}/{}/{}",
            self.base_url,
            self.location,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
        );
        let query = [
            ("unitGroup", "metric".to_string()),
            ("key", self.api_key.clone()),
            ("include", "days".to_string()),
            ("elements", "datetime,temp,humidity,pressure".to_string()),
        ];

        let body = fetch_text(&self.client, &url, &query).await?;
        Self::parse_timeline(&body)
    }
}
