use polars::prelude::*;

/// Rows that carry a freshly computed slope (train) and the rest (test)
#[derive(Debug, Clone)]
pub struct DataSplit {
    pub train: DataFrame,
    pub test: DataFrame,
}

impl DataSplit {
    pub fn train_rows(&self) -> usize {
        self.train.height()
    }

    pub fn test_rows(&self) -> usize {
        self.test.height()
    }
}
