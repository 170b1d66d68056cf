pub mod connectors;
pub mod sampler;
pub mod series;

pub use connectors::{DataValidator, RequiredColumn};
pub use sampler::SegmentSampler;
pub use series::PriceSeries;
