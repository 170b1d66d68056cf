use super::connectors::{DataValidator, RequiredColumn};
use crate::error::{PeaktrendError, Result};
use polars::prelude::*;

/// A validated OHLC table plus its columns extracted as plain vectors.
///
/// Timestamps are Int64. Integer columns pass through unchanged and
/// `Datetime` columns of any unit are converted to epoch milliseconds.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    data: DataFrame,
    pub timestamps: Vec<i64>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

impl PriceSeries {
    pub fn from_dataframe(df: DataFrame) -> Result<Self> {
        let data = DataValidator::normalize_columns(df)?;

        let timestamps = timestamp_column(&data)?;
        DataValidator::validate_timestamps(&timestamps)?;

        let [open, high, low, close] =
            RequiredColumn::prices().map(|required| float_column(&data, required.as_str()));

        Ok(Self {
            data,
            timestamps,
            open: open?,
            high: high?,
            low: low?,
            close: close?,
        })
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn into_data(self) -> DataFrame {
        self.data
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

pub(crate) fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    column
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| {
                PeaktrendError::DataLoading(format!("Null value in '{}' at row {}", name, row))
            })
        })
        .collect()
}

pub(crate) fn timestamp_column(df: &DataFrame) -> Result<Vec<i64>> {
    let name = RequiredColumn::Timestamp.as_str();
    let mut column = df.column(name)?.clone();
    if let DataType::Datetime(unit, tz) = column.dtype().clone() {
        if unit != TimeUnit::Milliseconds {
            column = column.cast(&DataType::Datetime(TimeUnit::Milliseconds, tz))?;
        }
    }
    let column = column.cast(&DataType::Int64)?;
    column
        .i64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| {
                PeaktrendError::DataLoading(format!("Null timestamp at row {}", row))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_extracts_columns() {
        let df = df! {
            "Date" => &[10i64, 20, 30],
            "Open" => &[1.0, 2.0, 3.0],
            "High" => &[2i64, 3, 4],
            "Low" => &[0.5, 1.5, 2.5],
            "Close" => &[1.5, 2.5, 3.5],
            "volume" => &[100.0, 200.0, 300.0],
        }
        .unwrap();

        let series = PriceSeries::from_dataframe(df).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.timestamps, vec![10, 20, 30]);
        assert_eq!(series.high, vec![2.0, 3.0, 4.0]);
        assert_eq!(series.low, vec![0.5, 1.5, 2.5]);
        // Extra columns ride along
        assert!(series.data().column("volume").is_ok());
    }

    #[test]
    fn test_datetime_timestamps_become_milliseconds() {
        let day_us = 86_400_000_000i64;
        let mut df = df! {
            "timestamp" => &[0, day_us, 2 * day_us],
            "open" => &[1.0, 2.0, 3.0],
            "high" => &[2.0, 3.0, 4.0],
            "low" => &[0.5, 1.5, 2.5],
            "close" => &[1.5, 2.5, 3.5],
        }
        .unwrap();
        let micros = df
            .column("timestamp")
            .unwrap()
            .cast(&DataType::Datetime(TimeUnit::Microseconds, None))
            .unwrap();
        df.with_column(micros).unwrap();

        let series = PriceSeries::from_dataframe(df).unwrap();
        assert_eq!(series.timestamps, vec![0, 86_400_000, 172_800_000]);
    }

    #[test]
    fn test_rejects_unsorted_timestamps() {
        let df = df! {
            "timestamp" => &[10i64, 30, 20],
            "open" => &[1.0, 2.0, 3.0],
            "high" => &[2.0, 3.0, 4.0],
            "low" => &[0.5, 1.5, 2.5],
            "close" => &[1.5, 2.5, 3.5],
        }
        .unwrap();

        assert!(matches!(
            PriceSeries::from_dataframe(df),
            Err(PeaktrendError::NonMonotonicTimestamps { row: 2 })
        ));
    }
}
