// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source selection with deterministic simulator fallback.
//!
//! The selector is the only component with fallback authority. Producers
//! report recoverable errors; the selector converts every one of them -
//! missing credentials, transport failure, malformed payload, even an empty
//! batch - into a simulated batch, so the presentation layer always
//! receives data and a crash is never the user-visible failure mode.

use crate::api::provider_source;
use crate::file::FileStore;
use crate::simulator::Simulator;
use crate::source::ReadingSource;
use stratus_core::{Reading, Result, SourceConfig, SourceKind, SourceTag, StratusError};

/// The result of one fetch cycle.
///
/// `served_by` names the producer that actually delivered the batch; when it
/// is the simulator but the configuration asked for something else,
/// `fallback_reason` carries the error that forced the substitution. That
/// pair is the "using simulated data" indicator surfaced to users.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// The readings, oldest first, strictly increasing in timestamp
    pub readings: Vec<Reading>,
    /// The source kind the configuration asked for
    pub configured: SourceKind,
    /// The producer that actually served this batch
    pub served_by: SourceTag,
    /// The error that forced a simulator substitution, if any
    pub fallback_reason: Option<StratusError>,
}

impl FetchOutcome {
    /// Returns `true` if the configured source was substituted.
    #[must_use]
    pub const fn used_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Chooses the active producer for a [`SourceConfig`] and fetches from it.
pub struct SourceSelector {
    config: SourceConfig,
    simulator: Simulator,
}

impl SourceSelector {
    /// Create a selector with the default (seed 42) fallback simulator.
    #[must_use]
    pub fn new(config: SourceConfig) -> Self {
        Self::with_simulator(config, Simulator::default())
    }

    /// Create a selector with a specific fallback simulator.
    #[must_use]
    pub fn with_simulator(config: SourceConfig, simulator: Simulator) -> Self {
        Self { config, simulator }
    }

    /// The configuration this selector was built with.
    #[must_use]
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Fetch `days` days of readings from the configured source, falling
    /// back to the simulator on any recoverable failure.
    ///
    /// This method is infallible by contract: the simulator cannot fail,
    /// so the caller always receives a non-empty batch.
    pub async fn fetch(&self, days: u32) -> FetchOutcome {
        match self.resolve() {
            Ok(source) => self.fetch_from(source.as_ref(), days).await,
            Err(reason) => self.fall_back(days, reason),
        }
    }

    /// Fetch from an explicit producer under the same fallback policy.
    ///
    /// Lets a dashboard wire in a producer of its own (a cache layer, a
    /// test double) while keeping the always-receives-data guarantee.
    pub async fn fetch_from(&self, source: &dyn ReadingSource, days: u32) -> FetchOutcome {
        match try_fetch(source, days).await {
            Ok((readings, served_by)) => {
                tracing::debug!(
                    count = readings.len(),
                    source = %served_by,
                    "batch served"
                );
                FetchOutcome {
                    readings,
                    configured: self.config.kind,
                    served_by,
                    fallback_reason: None,
                }
            }
            Err(reason) => self.fall_back(days, reason),
        }
    }

    fn fall_back(&self, days: u32, reason: StratusError) -> FetchOutcome {
        tracing::warn!(%reason, "source unavailable, using simulated data");
        FetchOutcome {
            readings: self.simulator.generate(days),
            configured: self.config.kind,
            served_by: SourceTag::Simulated,
            fallback_reason: Some(reason),
        }
    }

    fn resolve(&self) -> Result<Box<dyn ReadingSource>> {
        match self.config.kind {
            SourceKind::Simulated => Ok(Box::new(self.simulator.clone())),
            SourceKind::File => Ok(Box::new(FileStore::new(self.config.data_file.clone()))),
            SourceKind::Api => provider_source(&self.config),
        }
    }
}

async fn try_fetch(source: &dyn ReadingSource, days: u32) -> Result<(Vec<Reading>, SourceTag)> {
    let readings = source.fetch(days).await?;
    if readings.is_empty() {
        return Err(StratusError::malformed_response(
            "source returned an empty batch",
        ));
    }
    let served_by = source.tag();
    Ok((readings, served_by))
}
