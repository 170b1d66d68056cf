pub mod labeler;
pub mod latest_peak;
pub mod trend_series;

pub use labeler::label;
pub use latest_peak::{latest_peak, LatestPeak};
pub use trend_series::{backfill, TrendFrame, TrendSeriesBuilder};
