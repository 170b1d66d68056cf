use crate::config::{ConfigSection, SamplingConfig};
use crate::error::{PeaktrendError, Result};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws a contiguous, seed-reproducible window from a table
pub struct SegmentSampler {
    config: SamplingConfig,
}

impl SegmentSampler {
    pub fn new(config: SamplingConfig) -> Self {
        Self { config }
    }

    pub fn with_length(sample_length: usize) -> Self {
        Self::new(SamplingConfig { sample_length })
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Start row of the window for a table of `total_rows` rows.
    ///
    /// A fresh generator is seeded on every call, so the same seed always
    /// yields the same offset regardless of earlier draws.
    pub fn start_offset(&self, total_rows: usize, seed: u64) -> Result<usize> {
        self.config.validate()?;
        let length = self.config.sample_length;
        if length > total_rows {
            return Err(PeaktrendError::InsufficientData {
                required: length,
                actual: total_rows,
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        Ok(rng.gen_range(0..=total_rows - length))
    }

    /// Rows `[start, start + sample_length)` of `data`
    pub fn sample(&self, data: &DataFrame, seed: u64) -> Result<DataFrame> {
        let start = self.start_offset(data.height(), seed)?;
        log::debug!(
            "Sampling {} of {} rows from offset {} (seed {})",
            self.config.sample_length,
            data.height(),
            start,
            seed
        );
        Ok(data.slice(start as i64, self.config.sample_length))
    }
}

impl Default for SegmentSampler {
    fn default() -> Self {
        Self::new(SamplingConfig::default())
    }
}
