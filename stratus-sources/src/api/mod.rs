// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Connectors for the supported third-party APIs.
//!
//! Each provider module maps its response schema onto the common [`Reading`]
//! shape. Connectors tolerate HTTP failures, rate limiting and partial
//! payloads by signaling a recoverable error upward; they never fall back
//! themselves - that policy belongs to the selector.

pub mod openweathermap;
pub mod thingspeak;
pub mod visualcrossing;

pub use openweathermap::OpenWeatherMapSource;
pub use thingspeak::ThingSpeakSource;
pub use visualcrossing::VisualCrossingSource;

use crate::source::ReadingSource;
use std::time::Duration;
use stratus_core::{ApiProvider, Result, SourceConfig, StratusError, ENV_API_TYPE};

/// Build the connector selected by `config.provider`.
///
/// # Errors
///
/// `ConfigurationMissing` when the provider is unset (an unrecognized
/// `SENSOR_API_TYPE`) or the provider's own required settings are absent.
pub fn provider_source(config: &SourceConfig) -> Result<Box<dyn ReadingSource>> {
    match config.provider {
        Some(ApiProvider::OpenWeatherMap) => {
            Ok(Box::new(OpenWeatherMapSource::from_config(config)?))
        }
        Some(ApiProvider::VisualCrossing) => {
            Ok(Box::new(VisualCrossingSource::from_config(config)?))
        }
        Some(ApiProvider::ThingSpeak) => Ok(Box::new(ThingSpeakSource::from_config(config)?)),
        None => Err(StratusError::configuration_missing(ENV_API_TYPE)),
    }
}

pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| StratusError::network_failure(format!("building http client: {e}")))
}

/// GET a URL and return the body, classifying transport and status failures.
pub(crate) async fn fetch_text(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<String> {
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| StratusError::network_failure(format!("requesting {url}: {e}")))?;

    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(StratusError::network_failure(format!(
            "HTTP 429: rate limited by {url}"
        )));
    }
    if !status.is_success() {
        return Err(StratusError::network_failure(format!(
            "HTTP {status} from {url}"
        )));
    }

    response
        .text()
        .await
        .map_err(|e| StratusError::network_failure(format!("reading body from {url}: {e}")))
}
