use crate::error::{PeaktrendError, Result};
use polars::prelude::*;
use super::types::RequiredColumn;
use std::collections::HashMap;

pub struct DataValidator;

impl DataValidator {
    /// Validate that DataFrame has a timestamp column and numeric OHLC columns
    pub fn validate_ohlc(df: &DataFrame) -> Result<HashMap<RequiredColumn, String>> {
        let mut column_map = HashMap::new();

        for required in RequiredColumn::all() {
            match Self::find_column(df, &required) {
                Some(col_name) => {
                    column_map.insert(required, col_name.to_string());
                }
                None => {
                    return Err(PeaktrendError::DataLoading(format!(
                        "Missing required column: {} (tried aliases: {:?})",
                        required.as_str(),
                        required.aliases()
                    )));
                }
            }
        }

        for (req_col, actual_name) in &column_map {
            let column = df.column(actual_name)?;
            let dtype = column.dtype();
            let accepted = match req_col {
                RequiredColumn::Timestamp => matches!(
                    dtype,
                    DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32 | DataType::Datetime(_, _)
                ),
                _ => matches!(
                    dtype,
                    DataType::Float64 | DataType::Float32 | DataType::Int64 | DataType::Int32 | DataType::UInt64 | DataType::UInt32
                ),
            };
            if !accepted {
                return Err(PeaktrendError::DataLoading(format!(
                    "Column '{}' ({}) has unsupported type {:?}",
                    actual_name,
                    req_col.as_str(),
                    dtype
                )));
            }
            if column.null_count() > 0 {
                return Err(PeaktrendError::DataLoading(format!(
                    "Column '{}' contains {} null values",
                    actual_name,
                    column.null_count()
                )));
            }
        }

        Self::validate_ohlc_relationships(df, &column_map)?;

        Ok(column_map)
    }

    /// Find column by checking aliases
    fn find_column<'a>(df: &'a DataFrame, required: &RequiredColumn) -> Option<&'a str> {
        let columns = df.get_column_names();
        for alias in required.aliases() {
            if columns.iter().any(|col| col.as_str() == alias) {
                return Some(alias);
            }
        }
        None
    }

    /// Validate OHLC relationships (high >= low, high >= open, high >= close, etc.)
    fn validate_ohlc_relationships(
        df: &DataFrame,
        column_map: &HashMap<RequiredColumn, String>,
    ) -> Result<()> {
        let column = |required: RequiredColumn| -> Result<Column> {
            let name = column_map.get(&required).ok_or_else(|| {
                PeaktrendError::DataLoading(format!("Unmapped column: {}", required.as_str()))
            })?;
            Ok(df.column(name)?.cast(&DataType::Float64)?)
        };

        let open = column(RequiredColumn::Open)?;
        let high = column(RequiredColumn::High)?;
        let low = column(RequiredColumn::Low)?;
        let close = column(RequiredColumn::Close)?;

        let open = open.f64()?;
        let high = high.f64()?;
        let low = low.f64()?;
        let close = close.f64()?;

        for i in 0..df.height() {
            if let (Some(h), Some(l), Some(o), Some(c)) = (
                high.get(i),
                low.get(i),
                open.get(i),
                close.get(i),
            ) {
                if h < l {
                    return Err(PeaktrendError::DataLoading(format!(
                        "Invalid data at row {}: high ({}) < low ({})",
                        i, h, l
                    )));
                }
                if h < o || h < c {
                    return Err(PeaktrendError::DataLoading(format!(
                        "Invalid data at row {}: high ({}) < open ({}) or close ({})",
                        i, h, o, c
                    )));
                }
                if l > o || l > c {
                    return Err(PeaktrendError::DataLoading(format!(
                        "Invalid data at row {}: low ({}) > open ({}) or close ({})",
                        i, l, o, c
                    )));
                }
            }
        }

        Ok(())
    }

    /// Check for minimum required rows
    pub fn validate_minimum_rows(df: &DataFrame, min_rows: usize) -> Result<()> {
        if df.height() < min_rows {
            return Err(PeaktrendError::InsufficientData {
                required: min_rows,
                actual: df.height(),
            });
        }
        Ok(())
    }

    /// Timestamps must be unique and strictly increasing
    pub fn validate_timestamps(timestamps: &[i64]) -> Result<()> {
        match timestamps.windows(2).position(|w| w[1] <= w[0]) {
            Some(i) => Err(PeaktrendError::NonMonotonicTimestamps { row: i + 1 }),
            None => Ok(()),
        }
    }

    /// Rename aliased columns to the standard lowercase names
    pub fn normalize_columns(mut df: DataFrame) -> Result<DataFrame> {
        let column_map = Self::validate_ohlc(&df)?;

        for (required, actual_name) in column_map {
            let standard_name = required.as_str();
            if actual_name != standard_name {
                df.rename(&actual_name, standard_name.into())
                    .map_err(|e| PeaktrendError::DataLoading(format!("Failed to rename column: {}", e)))?;
            }
        }

        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_validate_good_data() {
        let df = df! {
            "timestamp" => &[1i64, 2, 3],
            "open" => &[100.0, 101.0, 102.0],
            "high" => &[101.0, 103.0, 104.0],
            "low" => &[99.0, 100.0, 101.0],
            "close" => &[100.5, 102.0, 103.0],
        }
        .unwrap();

        let result = DataValidator::validate_ohlc(&df);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_missing_column() {
        let df = df! {
            "timestamp" => &[1i64, 2],
            "open" => &[100.0, 101.0],
            "high" => &[101.0, 103.0],
            "low" => &[99.0, 100.0],
            // Missing 'close'
        }
        .unwrap();

        let result = DataValidator::validate_ohlc(&df);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_invalid_ohlc() {
        let df = df! {
            "timestamp" => &[1i64, 2],
            "open" => &[100.0, 101.0],
            "high" => &[99.0, 103.0], // High < Open at row 0
            "low" => &[99.0, 100.0],
            "close" => &[100.5, 102.0],
        }
        .unwrap();

        let result = DataValidator::validate_ohlc(&df);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_close_below_low() {
        // High and low are consistent; only the close escapes the range
        let df = df! {
            "timestamp" => &[1i64, 2],
            "open" => &[100.0, 101.0],
            "high" => &[101.0, 103.0],
            "low" => &[99.0, 100.0],
            "close" => &[100.5, 99.5],
        }
        .unwrap();

        match DataValidator::validate_ohlc(&df) {
            Err(PeaktrendError::DataLoading(msg)) => assert!(msg.contains("row 1")),
            other => panic!("expected a row 1 rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nulls() {
        let df = df! {
            "timestamp" => &[1i64, 2],
            "open" => &[100.0, 101.0],
            "high" => &[Some(101.0), None],
            "low" => &[99.0, 100.0],
            "close" => &[100.5, 102.0],
        }
        .unwrap();

        assert!(matches!(
            DataValidator::validate_ohlc(&df),
            Err(PeaktrendError::DataLoading(_))
        ));
    }

    #[test]
    fn test_timestamps_must_increase() {
        assert!(DataValidator::validate_timestamps(&[1, 2, 3]).is_ok());
        assert!(DataValidator::validate_timestamps(&[]).is_ok());
        assert!(matches!(
            DataValidator::validate_timestamps(&[1, 3, 3, 4]),
            Err(PeaktrendError::NonMonotonicTimestamps { row: 2 })
        ));
        assert!(matches!(
            DataValidator::validate_timestamps(&[5, 4]),
            Err(PeaktrendError::NonMonotonicTimestamps { row: 1 })
        ));
    }

    #[test]
    fn test_column_aliases() {
        let df = df! {
            "Date" => &[1i64, 2],
            "Open Price" => &[100.0, 101.0],
            "High Price" => &[101.0, 103.0],
            "low" => &[99.0, 100.0],
            "Close" => &[100.5, 102.0],
        }
        .unwrap();

        let df = DataValidator::normalize_columns(df).unwrap();
        let cols = df.get_column_names();
        for name in ["timestamp", "open", "high", "low", "close"] {
            assert!(cols.iter().any(|c| c.as_str() == name));
        }
    }
}
