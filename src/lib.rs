pub mod config;
pub mod data;
pub mod error;
pub mod functions;
pub mod ml;
pub mod splitters;
pub mod types;

pub use crate::config::{AppConfig, ConfigManager, DetectionConfig, PeakBackend, SamplingConfig};
pub use crate::data::{PriceSeries, SegmentSampler};
pub use crate::error::{PeaktrendError, Result};
pub use crate::functions::{compute_slopes, ExtremaDetector, PeakFinder};
pub use crate::ml::labeling::{label, latest_peak, LatestPeak, TrendFrame, TrendSeriesBuilder};
pub use crate::splitters::{DataSplit, DataSplitter, ProvenanceSplitter};
pub use crate::types::{ExtremumPoint, FilledSlope, PeakKind, SlopeObservation, TrendCategory, TrendRow};
