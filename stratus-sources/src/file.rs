// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! CSV persistence for reading batches.
//!
//! The on-disk format is one row per [`Reading`] with a header matching the
//! field names; timestamps are RFC 3339 strings and absent metrics are empty
//! cells, so a round trip preserves `None` as `None`.

use crate::source::{normalize_batch, ReadingSource};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use stratus_core::{Reading, Result, SourceTag, StratusError};

/// Load and save readings at a fixed CSV path.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given path. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in the file, normalized oldest-first.
    ///
    /// # Errors
    ///
    /// `ConfigurationMissing` if the file does not exist,
    /// `MalformedResponse` if a row cannot be decoded.
    pub fn load(&self) -> Result<Vec<Reading>> {
        if !self.path.exists() {
            return Err(StratusError::configuration_missing(format!(
                "data file {}",
                self.path.display()
            )));
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| malformed(&self.path, "opening", &e))?;

        let mut readings = Vec::new();
        for row in reader.deserialize() {
            let reading: Reading = row.map_err(|e| malformed(&self.path, "decoding", &e))?;
            readings.push(reading);
        }

        Ok(normalize_batch(readings))
    }

    /// Write the batch, replacing any existing file content.
    ///
    /// # Errors
    ///
    /// `MalformedResponse` with a `writing` context on I/O or encoding
    /// failure.
    pub fn save(&self, readings: &[Reading]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)
            .map_err(|e| malformed(&self.path, "writing", &e))?;

        for reading in readings {
            writer
                .serialize(reading)
                .map_err(|e| malformed(&self.path, "writing", &e))?;
        }

        writer
            .flush()
            .map_err(|e| malformed(&self.path, "writing", &e))
    }
}

#[async_trait]
impl ReadingSource for FileStore {
    fn tag(&self) -> SourceTag {
        SourceTag::File
    }

    /// Fetch = load, limited to the most recent `days` records.
    async fn fetch(&self, days: u32) -> Result<Vec<Reading>> {
        let mut readings = self.load()?;
        let keep = days as usize;
        if keep > 0 && readings.len() > keep {
            readings.drain(..readings.len() - keep);
        }
        Ok(readings)
    }
}

fn malformed(path: &Path, action: &str, error: &dyn std::fmt::Display) -> StratusError {
    StratusError::malformed_response(format!("{action} {}: {error}", path.display()))
}
