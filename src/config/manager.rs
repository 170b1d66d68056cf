use super::{
    detection::DetectionConfig,
    sampling::SamplingConfig,
    traits::ConfigSection,
};
use crate::error::PeaktrendError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `PEAKTREND__DETECTION__PROMINENCE=2.5`
pub const ENV_PREFIX: &str = "PEAKTREND";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub detection: DetectionConfig,
    pub sampling: SamplingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), PeaktrendError> {
        validate_section(&self.detection)?;
        validate_section(&self.sampling)?;
        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, PeaktrendError> {
        let config: AppConfig = toml::from_str(contents)
            .map_err(|e| PeaktrendError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, PeaktrendError> {
        toml::to_string_pretty(self)
            .map_err(|e| PeaktrendError::Configuration(format!("Failed to serialize: {}", e)))
    }
}

/// Prefix a section's validation error with its table name
fn validate_section<S: ConfigSection>(section: &S) -> Result<(), PeaktrendError> {
    section.validate().map_err(|e| match e {
        PeaktrendError::Configuration(msg) => {
            PeaktrendError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

#[derive(Debug, Default)]
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config file (format picked from its extension) with
    /// environment overrides layered on top.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PeaktrendError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PeaktrendError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        log::info!("Loaded configuration from {}", path.display());
        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PeaktrendError> {
        let toml_str = self.config.to_toml_string()?;

        std::fs::write(path, toml_str)
            .map_err(|e| PeaktrendError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), PeaktrendError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}
