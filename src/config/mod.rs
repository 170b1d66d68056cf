pub mod traits;
pub mod detection;
pub mod sampling;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use detection::{DetectionConfig, PeakBackend};
pub use sampling::SamplingConfig;
pub use traits::ConfigSection;
