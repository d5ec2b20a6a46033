// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Mock producers for exercising selector and fallback behavior.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use stratus_core::{Reading, Result, SourceTag, StratusError};
use stratus_sources::ReadingSource;

/// A source that serves the same batch on every fetch.
pub struct StaticSource {
    tag: SourceTag,
    batch: Vec<Reading>,
    fetches: AtomicUsize,
}

impl StaticSource {
    /// Create a source serving `batch` under `tag`.
    #[must_use]
    pub fn new(tag: SourceTag, batch: Vec<Reading>) -> Self {
        Self {
            tag,
            batch,
            fetches: AtomicUsize::new(0),
        }
    }

    /// How many times `fetch` has been called.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReadingSource for StaticSource {
    fn tag(&self) -> SourceTag {
        self.tag
    }

    async fn fetch(&self, _days: u32) -> Result<Vec<Reading>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.batch.clone())
    }
}

/// A source that fails every fetch with a fixed error.
pub struct FailingSource {
    tag: SourceTag,
    error: StratusError,
}

impl FailingSource {
    /// Create a source failing with `error`.
    #[must_use]
    pub fn new(tag: SourceTag, error: StratusError) -> Self {
        Self { tag, error }
    }

    /// A failing source with a generic network error.
    #[must_use]
    pub fn unreachable() -> Self {
        Self::new(
            SourceTag::File,
            StratusError::network_failure("connection refused"),
        )
    }
}

#[async_trait]
impl ReadingSource for FailingSource {
    fn tag(&self) -> SourceTag {
        self.tag
    }

    async fn fetch(&self, _days: u32) -> Result<Vec<Reading>> {
        Err(self.error.clone())
    }
}
