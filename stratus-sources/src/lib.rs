// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Reading producers for the Stratus sensor pipeline.
//!
//! This crate holds everything that produces [`Reading`](stratus_core::Reading)
//! batches and the policy that chooses between them:
//!
//! - [`ReadingSource`] - the port every producer implements
//! - [`Simulator`] - seeded synthetic series, the infallible fallback
//! - [`FileStore`] - CSV persistence with lossless round-trip
//! - [`api`] - connectors for OpenWeatherMap, Visual Crossing and ThingSpeak
//! - [`SourceSelector`] - resolves the configured producer and substitutes
//!   the simulator on any recoverable failure
//!
//! # Fallback policy
//!
//! Producers never fall back themselves; they signal recoverable errors
//! upward and the selector decides. A fetch through the selector therefore
//! cannot fail:
//!
//! ```rust,no_run
//! use stratus_core::SourceConfig;
//! use stratus_sources::SourceSelector;
//!
//! # async fn example() {
//! let selector = SourceSelector::new(SourceConfig::from_env());
//! let outcome = selector.fetch(100).await;
//!
//! if outcome.used_fallback() {
//!     println!("using simulated data");
//! }
//! assert!(!outcome.readings.is_empty());
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod api;
pub mod file;
pub mod selector;
pub mod simulator;
pub mod source;

pub use api::{OpenWeatherMapSource, ThingSpeakSource, VisualCrossingSource};
pub use file::FileStore;
pub use selector::{FetchOutcome, SourceSelector};
pub use simulator::Simulator;
pub use source::{normalize_batch, ReadingSource};
