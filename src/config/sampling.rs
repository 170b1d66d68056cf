use super::traits::ConfigSection;
use crate::error::PeaktrendError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub sample_length: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { sample_length: 120 }
    }
}

impl ConfigSection for SamplingConfig {
    fn section_name() -> &'static str {
        "sampling"
    }

    fn validate(&self) -> Result<(), PeaktrendError> {
        if self.sample_length == 0 {
            return Err(PeaktrendError::Configuration(
                "Sample length must be at least 1".to_string()
            ));
        }
        Ok(())
    }
}
