// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! ThingSpeak channel-feed connector.
//!
//! ThingSpeak channels report metrics as numbered string fields; by
//! convention here `field1` is temperature, `field2` humidity and `field3`
//! pressure. Field values are parsed leniently - an empty or non-numeric
//! cell becomes `None`, never a default - while an undecodable feed
//! timestamp fails the whole batch.

use crate::api::{build_client, fetch_text};
use crate::source::{normalize_batch, ReadingSource};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use stratus_core::{
    ApiProvider, Reading, Result, SourceConfig, SourceTag, StratusError,
    ENV_THINGSPEAK_CHANNEL_ID,
};

/// Production endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://api.thingspeak.com";

/// Maximum feed entries per request, the API's documented cap.
const MAX_RESULTS: u32 = 8000;

#[derive(Debug, Deserialize)]
struct FeedsResponse {
    #[serde(default)]
    feeds: Vec<Feed>,
}

#[derive(Debug, Deserialize)]
struct Feed {
    created_at: String,
    #[serde(default)]
    field1: Option<String>,
    #[serde(default)]
    field2: Option<String>,
    #[serde(default)]
    field3: Option<String>,
}

/// Connector for ThingSpeak channel feeds.
pub struct ThingSpeakSource {
    client: reqwest::Client,
    api_key: Option<String>,
    channel_id: String,
    base_url: String,
}

impl ThingSpeakSource {
    /// Build the connector from the process configuration.
    ///
    /// The API key is optional - public channels serve feeds without one -
    /// but a channel id is required.
    ///
    /// # Errors
    ///
    /// `ConfigurationMissing` when no channel id can be resolved.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        let channel_id = config
            .thingspeak_channel()
            .ok_or_else(|| StratusError::configuration_missing(ENV_THINGSPEAK_CHANNEL_ID))?
            .to_string();

        Ok(Self {
            client: build_client(config.request_timeout)?,
            api_key: config.api_key.clone(),
            channel_id,
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

    /// Decode a feeds payload into normalized readings.
    ///
    /// # Errors
    ///
    /// `MalformedResponse` when the body is not the expected schema or a
    /// feed entry carries an undecodable timestamp.
    pub fn parse_feeds(body: &str) -> Result<Vec<Reading>> {
        let response: FeedsResponse = serde_json::from_str(body)
            .map_err(|e| StratusError::malformed_response(format!("thingspeak: {e}")))?;

        let mut readings = Vec::with_capacity(response.feeds.len());
        for feed in response.feeds {
            let timestamp = DateTime::parse_from_rfc3339(&feed.created_at)
                .map_err(|e| {
                    StratusError::malformed_response(format!(
                        "thingspeak: bad created_at {:?}: {e}",
                        feed.created_at
                    ))
                })?
                .with_timezone(&Utc);

            let mut reading = Reading::new(timestamp, SourceTag::Api(ApiProvider::ThingSpeak));
            if let Some(temp) = lenient_number(feed.field1.as_deref()) {
                reading = reading.with_temperature(temp);
            }
            if let Some(humidity) = lenient_number(feed.field2.as_deref()) {
                reading = reading.with_humidity(humidity);
            }
            if let Some(pressure) = lenient_number(feed.field3.as_deref()) {
                reading = reading.with_pressure(pressure);
            }
            readings.push(reading);
        }

        Ok(normalize_batch(readings))
    }
}

#[async_trait]
impl ReadingSource for ThingSpeakSource {
    fn tag(&self) -> SourceTag {
        SourceTag::Api(ApiProvider::ThingSpeak)
    }

    async fn fetch(&self, days: u32) -> Result<Vec<Reading>> {
        let url = format!("{}/channels/{}/feeds.json", self.base_url, self.channel_id);
        let start = Utc::now() - Duration::days(i64::from(days));

        let mut query = vec![
            ("start", start.timestamp().to_string()),
            ("results", MAX_RESULTS.to_string()),
        ];
        if let Some(key) = &self.api_key {
            query.push(("api_key", key.clone()));
        }

        let body = fetch_text(&self.client, &url, &query).await?;
        Self::parse_feeds(&body)
    }
}

/// Parse a numeric field the way channel data actually arrives: trimmed,
/// possibly empty, possibly garbage. Anything unparsable is `None`.
fn lenient_number(value: Option<&str>) -> Option<f64> {
    value?.trim().parse().ok()
}
