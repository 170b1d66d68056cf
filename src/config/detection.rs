use super::traits::ConfigSection;
use crate::error::PeaktrendError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub prominence: f64,   // minimum vertical drop on both sides of a peak
    pub distance: usize,   // minimum horizontal separation in samples
    pub backend: PeakBackend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeakBackend {
    Builtin,
    FindPeaks,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            prominence: 5.0,
            distance: 1,
            backend: PeakBackend::Builtin,
        }
    }
}

impl DetectionConfig {
    pub fn new(prominence: f64, distance: usize) -> Self {
        Self {
            prominence,
            distance,
            ..Default::default()
        }
    }
}

impl ConfigSection for DetectionConfig {
    fn section_name() -> &'static str {
        "detection"
    }

    fn validate(&self) -> Result<(), PeaktrendError> {
        if !self.prominence.is_finite() || self.prominence < 0.0 {
            return Err(PeaktrendError::Configuration(
                "Prominence must be a finite, non-negative number".to_string()
            ));
        }
        if self.distance < 1 {
            return Err(PeaktrendError::Configuration(
                "Peak distance must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
