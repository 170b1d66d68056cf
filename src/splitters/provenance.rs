use super::base::DataSplitter;
use super::types::DataSplit;
use crate::error::PeaktrendError;
use crate::ml::labeling::TrendFrame;
use polars::prelude::*;

/// Splits on the provenance flags: a row is train data when either slope
/// was computed on that row rather than back-filled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvenanceSplitter;

impl DataSplitter for ProvenanceSplitter {
    fn name(&self) -> &'static str {
        "provenance"
    }

    fn split(&self, frame: &TrendFrame) -> Result<DataSplit, PeaktrendError> {
        let (high_computed, low_computed) = frame.provenance_mask()?;
        let train_mask: Vec<bool> = high_computed
            .iter()
            .zip(&low_computed)
            .map(|(&h, &l)| h || l)
            .collect();
        let test_mask: Vec<bool> = train_mask.iter().map(|&t| !t).collect();

        let data = frame.data();
        let train = data.filter(&BooleanChunked::from_slice("train".into(), &train_mask))?;
        let test = data.filter(&BooleanChunked::from_slice("test".into(), &test_mask))?;

        log::debug!("Split {} rows into {} train / {} test", data.height(), train.height(), test.height());

        Ok(DataSplit { train, test })
    }
}
