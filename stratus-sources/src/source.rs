// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The producer port every data source implements.

use async_trait::async_trait;
use stratus_core::{Reading, Result, SourceTag};

/// A producer of reading batches.
///
/// Implemented by the simulator, the file store and each API connector.
/// Implementations signal recoverable errors upward instead of panicking;
/// deciding what to do about a failed source is the selector's job, never
/// the producer's.
///
/// # Contract
///
/// A successful batch is oldest-first and strictly increasing in timestamp
/// (run provider output through [`normalize_batch`] before returning it).
#[async_trait]
pub trait ReadingSource: Send + Sync {
    /// The tag stamped on readings served by this producer.
    fn tag(&self) -> SourceTag;

    /// Fetch up to `days` days of readings, oldest first.
    async fn fetch(&self, days: u32) -> Result<Vec<Reading>>;
}

/// Normalize a provider batch to the strictly-increasing invariant.
///
/// Sorts oldest-first and drops duplicate timestamps. The sort is stable,
/// so on a tie the first-received reading wins.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use stratus_core::{strictly_increasing, Reading, SourceTag};
/// use stratus_sources::normalize_batch;
///
/// let day = |d| Utc.with_ymd_and_hms(2026, 3, d, 0, 0, 0).unwrap();
/// let shuffled = vec![
///     Reading::new(day(2), SourceTag::File),
///     Reading::new(day(1), SourceTag::File),
///     Reading::new(day(2), SourceTag::File),
/// ];
///
/// let batch = normalize_batch(shuffled);
/// assert_eq!(batch.len(), 2);
/// assert!(strictly_increasing(&batch));
/// ```
#[must_use]
pub fn normalize_batch(mut readings: Vec<Reading>) -> Vec<Reading> {
    readings.sort_by_key(|r| r.timestamp);
    readings.dedup_by_key(|r| r.timestamp);
    readings
}
