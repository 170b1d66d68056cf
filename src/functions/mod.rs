pub mod extrema;
pub mod slope;
pub mod traits;

pub use extrema::{find_peaks, find_troughs, ExtremaDetector, FindPeaksAdapter, ProminencePeakFinder};
pub use slope::{compute_slopes, slope_observations};
pub use traits::PeakFinder;
