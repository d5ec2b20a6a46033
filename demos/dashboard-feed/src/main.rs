// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One dashboard refresh cycle on the command line.
//!
//! Reads the source configuration from the environment, fetches a batch
//! (falling back to simulated data if the configured source is down),
//! trains the forecaster and prints the history tail plus the forecast.
//!
//! ```text
//! DATA_SOURCE=api SENSOR_API_TYPE=openweathermap SENSOR_API_KEY=... cargo run
//! ```

use stratus::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = SourceConfig::from_env();
    tracing::info!(?config.kind, "starting refresh cycle");

    let selector = SourceSelector::new(config);
    let mut predictor = Predictor::new(PredictorConfig::default());

    let outcome = selector.fetch(100).await;
    if let Some(reason) = &outcome.fallback_reason {
        println!("!! using simulated data ({reason})");
    }
    println!(
        "fetched {} readings from {}",
        outcome.readings.len(),
        outcome.served_by
    );

    println!("\nlast 5 readings:");
    for reading in outcome.readings.iter().rev().take(5).rev() {
        println!(
            "  {}  temp {}  humidity {}  pressure {}",
            reading.timestamp.format("%Y-%m-%d %H:%M"),
            fmt_metric(reading.temperature, "°C"),
            fmt_metric(reading.humidity, "%"),
            fmt_metric(reading.pressure, "hPa"),
        );
    }

    predictor.observe(&outcome.readings);
    match predictor.forecast() {
        Ok(forecast) => {
            println!("\nforecast (model v{}):", forecast[0].model_version);
            for record in &forecast {
                println!(
                    "  {}  temp {:.1} °C",
                    record.date.format("%Y-%m-%d"),
                    record.predicted_temperature
                );
            }
        }
        Err(e) => println!("\nforecast skipped: {e}"),
    }
}

fn fmt_metric(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1} {unit}"))
}
