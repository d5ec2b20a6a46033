// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source configuration, read once from the environment at process start.
//!
//! The dashboard process constructs a single [`SourceConfig`] during startup
//! and never mutates it afterwards; every refresh cycle borrows it. Unknown
//! values degrade rather than abort: an unrecognized `DATA_SOURCE` selects
//! the simulator, an unrecognized `SENSOR_API_TYPE` is surfaced as a
//! recoverable configuration error when (and only when) an API fetch is
//! attempted.
//!
//! # Environment variables
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `DATA_SOURCE` | `simulated`, `file` or `api` | `simulated` |
//! | `SENSOR_API_TYPE` | `openweathermap`, `visualcrossing` or `thingspeak` | `openweathermap` |
//! | `SENSOR_API_KEY` | provider API key | unset |
//! | `SENSOR_API_LOCATION` | location query, e.g. `London,UK` | `London,UK` |
//! | `THINGSPEAK_CHANNEL_ID` | numeric channel for ThingSpeak | unset |
//! | `SENSOR_DATA_FILE` | CSV dataset path for the file source | `sensor_data.csv` |
//! | `SENSOR_API_ENDPOINT` | endpoint root override (staging, tests) | provider default |

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Environment variable selecting the data source kind.
pub const ENV_DATA_SOURCE: &str = "DATA_SOURCE";
/// Environment variable selecting the API provider.
pub const ENV_API_TYPE: &str = "SENSOR_API_TYPE";
/// Environment variable holding the provider API key.
pub const ENV_API_KEY: &str = "SENSOR_API_KEY";
/// Environment variable holding the location query.
pub const ENV_API_LOCATION: &str = "SENSOR_API_LOCATION";
/// Environment variable holding the ThingSpeak channel id.
pub const ENV_THINGSPEAK_CHANNEL_ID: &str = "THINGSPEAK_CHANNEL_ID";
/// Environment variable holding the CSV dataset path.
pub const ENV_DATA_FILE: &str = "SENSOR_DATA_FILE";
/// Environment variable overriding the provider endpoint root.
pub const ENV_API_ENDPOINT: &str = "SENSOR_API_ENDPOINT";

/// Which kind of producer the pipeline should draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Synthetic data, always available
    #[default]
    Simulated,
    /// Persisted CSV dataset
    File,
    /// Live third-party API
    Api,
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simulated" => Ok(Self::Simulated),
            "file" => Ok(Self::File),
            "api" => Ok(Self::Api),
            other => Err(format!("unknown data source kind: {other}")),
        }
    }
}

/// Supported third-party API providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiProvider {
    /// OpenWeatherMap current-conditions API
    OpenWeatherMap,
    /// Visual Crossing timeline API
    VisualCrossing,
    /// ThingSpeak IoT channel feeds
    ThingSpeak,
}

impl ApiProvider {
    /// Stable lowercase name, matching the `SENSOR_API_TYPE` values.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OpenWeatherMap => "openweathermap",
            Self::VisualCrossing => "visualcrossing",
            Self::ThingSpeak => "thingspeak",
        }
    }
}

impl fmt::Display for ApiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openweathermap" => Ok(Self::OpenWeatherMap),
            "visualcrossing" => Ok(Self::VisualCrossing),
            "thingspeak" => Ok(Self::ThingSpeak),
            other => Err(format!("unknown api provider: {other}")),
        }
    }
}

/// Immutable source configuration for one process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    /// Which producer kind to draw from
    pub kind: SourceKind,
    /// API provider; `None` when `SENSOR_API_TYPE` held an unknown value
    pub provider: Option<ApiProvider>,
    /// Provider API key, if configured
    pub api_key: Option<String>,
    /// Location query for weather providers
    pub location: String,
    /// ThingSpeak channel id, if configured
    pub channel_id: Option<String>,
    /// Endpoint root override; `None` selects the provider's production URL
    pub api_base_url: Option<String>,
    /// CSV dataset path for the file source
    pub data_file: PathBuf,
    /// Per-request HTTP timeout
    pub request_timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Simulated,
            provider: Some(ApiProvider::OpenWeatherMap),
            api_key: None,
            location: "London,UK".to_string(),
            channel_id: None,
            api_base_url: None,
            data_file: PathBuf::from("sensor_data.csv"),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl SourceConfig {
    /// Build the configuration from the process environment.
    ///
    /// Never fails: unset variables take their defaults, an unknown
    /// `DATA_SOURCE` degrades to `Simulated` with a warning, and an unknown
    /// `SENSOR_API_TYPE` leaves `provider` empty so the selector can report
    /// it at fetch time.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let kind = match env::var(ENV_DATA_SOURCE) {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{e}; defaulting to simulated data");
                SourceKind::Simulated
            }),
            Err(_) => SourceKind::Simulated,
        };

        let provider = match env::var(ENV_API_TYPE) {
            Ok(raw) => match raw.parse() {
                Ok(provider) => Some(provider),
                Err(e) => {
                    tracing::warn!("{e}");
                    None
                }
            },
            Err(_) => defaults.provider,
        };

        Self {
            kind,
            provider,
            api_key: non_empty(env::var(ENV_API_KEY).ok()),
            location: non_empty(env::var(ENV_API_LOCATION).ok()).unwrap_or(defaults.location),
            channel_id: non_empty(env::var(ENV_THINGSPEAK_CHANNEL_ID).ok()),
            api_base_url: non_empty(env::var(ENV_API_ENDPOINT).ok()),
            data_file: env::var(ENV_DATA_FILE)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            request_timeout: defaults.request_timeout,
        }
    }

    /// The ThingSpeak channel id, falling back to the first comma-separated
    /// part of the location (legacy configurations stored it there).
    #[must_use]
    pub fn thingspeak_channel(&self) -> Option<&str> {
        if let Some(channel) = self.channel_id.as_deref() {
            return Some(channel);
        }
        let head = self.location.split(',').next()?.trim();
        if head.chars().all(|c| c.is_ascii_digit()) && !head.is_empty() {
            Some(head)
        } else {
            None
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
