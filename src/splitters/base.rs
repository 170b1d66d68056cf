use super::types::DataSplit;
use crate::error::PeaktrendError;
use crate::ml::labeling::TrendFrame;

pub trait DataSplitter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Partition a labeled table; row order is kept inside each part
    fn split(&self, frame: &TrendFrame) -> Result<DataSplit, PeaktrendError>;
}
