use super::labeler::label;
use crate::config::{ConfigSection, DetectionConfig};
use crate::data::series::{float_column, timestamp_column};
use crate::data::{DataValidator, PriceSeries};
use crate::error::{PeaktrendError, Result};
use crate::functions::{slope_observations, ExtremaDetector, PeakFinder};
use crate::types::{FilledSlope, SlopeObservation, TrendCategory, TrendRow};
use polars::prelude::*;

/// Shortest series that can hold an interior extremum
pub const MIN_SERIES_ROWS: usize = 3;

pub const HIGH_SLOPE: &str = "high_slope";
pub const LOW_SLOPE: &str = "low_slope";
pub const HIGH_SLOPE_COMPUTED: &str = "high_slope_computed";
pub const LOW_SLOPE_COMPUTED: &str = "low_slope_computed";
pub const TREND: &str = "trend";

/// Labels every row of a price table from the slopes between its swing
/// highs and swing lows.
pub struct TrendSeriesBuilder {
    detector: ExtremaDetector,
}

impl TrendSeriesBuilder {
    pub fn new(config: DetectionConfig) -> Self {
        Self {
            detector: ExtremaDetector::new(config),
        }
    }

    pub fn with_finder(config: DetectionConfig, finder: Box<dyn PeakFinder>) -> Self {
        Self {
            detector: ExtremaDetector::with_finder(config, finder),
        }
    }

    pub fn detector(&self) -> &ExtremaDetector {
        &self.detector
    }

    pub fn build(&self, data: &DataFrame) -> Result<TrendFrame> {
        let series = PriceSeries::from_dataframe(data.clone())?;
        self.build_series(series)
    }

    pub fn build_series(&self, series: PriceSeries) -> Result<TrendFrame> {
        self.detector.config().validate()?;
        DataValidator::validate_minimum_rows(series.data(), MIN_SERIES_ROWS)?;

        let peaks = self.detector.find_peaks(&series.high);
        let troughs = self.detector.find_troughs(&series.low);
        log::debug!(
            "Detected {} peaks and {} troughs over {} rows ({} finder)",
            peaks.len(),
            troughs.len(),
            series.len(),
            self.detector.finder_name()
        );
        if peaks.is_empty() || troughs.is_empty() {
            log::warn!(
                "No {} found; every row will be indeterminate",
                if peaks.is_empty() { "peaks" } else { "troughs" }
            );
        }

        let high = slope_track(&series.timestamps, &series.high, &peaks)?;
        let low = slope_track(&series.timestamps, &series.low, &troughs)?;

        let trend: Vec<&str> = high
            .iter()
            .zip(&low)
            .map(|(h, l)| label(h.map(|s| s.value), l.map(|s| s.value)).as_str())
            .collect();

        let mut data = series.into_data();
        data.with_column(Series::new(HIGH_SLOPE.into(), values(&high)))?;
        data.with_column(Series::new(LOW_SLOPE.into(), values(&low)))?;
        data.with_column(Series::new(HIGH_SLOPE_COMPUTED.into(), provenance(&high)))?;
        data.with_column(Series::new(LOW_SLOPE_COMPUTED.into(), provenance(&low)))?;
        data.with_column(Series::new(TREND.into(), trend))?;

        Ok(TrendFrame { data })
    }
}

impl Default for TrendSeriesBuilder {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

/// Slopes at the given extrema joined back onto the full index, then back-filled
fn slope_track(
    timestamps: &[i64],
    prices: &[f64],
    extrema: &[usize],
) -> Result<Vec<Option<FilledSlope>>> {
    let points = ExtremaDetector::extremum_points(prices, extrema);
    let observations = slope_observations(timestamps, &points);
    let direct = join_observations(timestamps, &observations)?;
    Ok(backfill(&direct))
}

/// Place each observation on the row with its timestamp. Both sides are
/// ascending, so one forward walk over the index is enough.
fn join_observations(
    timestamps: &[i64],
    observations: &[SlopeObservation],
) -> Result<Vec<Option<f64>>> {
    let mut direct = vec![None; timestamps.len()];
    let mut row = 0;

    for observation in observations {
        while row < timestamps.len() && timestamps[row] < observation.timestamp {
            row += 1;
        }
        match timestamps.get(row) {
            Some(&ts) if ts == observation.timestamp => direct[row] = Some(observation.slope),
            _ => {
                return Err(PeaktrendError::DataLoading(format!(
                    "Slope observation at {} has no matching row",
                    observation.timestamp
                )))
            }
        }
    }

    Ok(direct)
}

/// Fill each gap with the next later observation, scanning the index once
/// from the end. Rows after the last observation stay missing.
pub fn backfill(direct: &[Option<f64>]) -> Vec<Option<FilledSlope>> {
    let mut filled = vec![None; direct.len()];
    let mut next = None;

    for i in (0..direct.len()).rev() {
        filled[i] = match direct[i] {
            Some(value) => {
                next = Some(value);
                Some(FilledSlope { value, computed: true })
            }
            None => next.map(|value| FilledSlope { value, computed: false }),
        };
    }

    filled
}

fn values(track: &[Option<FilledSlope>]) -> Vec<Option<f64>> {
    track.iter().map(|s| s.map(|s| s.value)).collect()
}

fn provenance(track: &[Option<FilledSlope>]) -> Vec<bool> {
    track.iter().map(|s| s.is_some_and(|s| s.computed)).collect()
}

/// Price table with `high_slope`, `low_slope`, their provenance flags and
/// the `trend` label appended
#[derive(Debug, Clone)]
pub struct TrendFrame {
    data: DataFrame,
}

impl TrendFrame {
    /// Wrap a table that already carries the trend columns, e.g. a slice
    /// of an earlier build
    pub fn from_dataframe(data: DataFrame) -> Result<Self> {
        let columns = data.get_column_names();
        for required in [HIGH_SLOPE, LOW_SLOPE, HIGH_SLOPE_COMPUTED, LOW_SLOPE_COMPUTED, TREND] {
            if !columns.iter().any(|c| c.as_str() == required) {
                return Err(PeaktrendError::DataLoading(format!(
                    "Missing trend column: {}",
                    required
                )));
            }
        }
        Ok(Self { data })
    }

    pub fn data(&self) -> &DataFrame {
        &self.data
    }

    pub fn into_data(self) -> DataFrame {
        self.data
    }

    pub fn height(&self) -> usize {
        self.data.height()
    }

    pub fn is_empty(&self) -> bool {
        self.data.height() == 0
    }

    pub fn provenance_mask(&self) -> Result<(Vec<bool>, Vec<bool>)> {
        Ok((
            bool_column(&self.data, HIGH_SLOPE_COMPUTED)?,
            bool_column(&self.data, LOW_SLOPE_COMPUTED)?,
        ))
    }

    pub fn trends(&self) -> Result<Vec<TrendCategory>> {
        self.data
            .column(TREND)?
            .str()?
            .into_iter()
            .map(|value| {
                value
                    .unwrap_or_default()
                    .parse::<TrendCategory>()
                    .map_err(PeaktrendError::DataLoading)
            })
            .collect()
    }

    pub fn rows(&self) -> Result<Vec<TrendRow>> {
        let timestamps = timestamp_column(&self.data)?;
        let open = float_column(&self.data, "open")?;
        let high = float_column(&self.data, "high")?;
        let low = float_column(&self.data, "low")?;
        let close = float_column(&self.data, "close")?;
        let high_slope = optional_column(&self.data, HIGH_SLOPE)?;
        let low_slope = optional_column(&self.data, LOW_SLOPE)?;
        let (high_computed, low_computed) = self.provenance_mask()?;
        let trends = self.trends()?;

        Ok((0..self.height())
            .map(|i| TrendRow {
                timestamp: timestamps[i],
                open: open[i],
                high: high[i],
                low: low[i],
                close: close[i],
                high_slope: high_slope[i],
                low_slope: low_slope[i],
                high_computed: high_computed[i],
                low_computed: low_computed[i],
                trend: trends[i],
            })
            .collect())
    }

    /// Slopes at the detected swing highs, in chronological order
    pub fn high_observations(&self) -> Result<Vec<SlopeObservation>> {
        Ok(self
            .rows()?
            .iter()
            .filter(|r| r.high_computed)
            .filter_map(|r| r.high_slope.map(|slope| SlopeObservation { timestamp: r.timestamp, slope }))
            .collect())
    }

    /// Slopes at the detected swing lows, in chronological order
    pub fn low_observations(&self) -> Result<Vec<SlopeObservation>> {
        Ok(self
            .rows()?
            .iter()
            .filter(|r| r.low_computed)
            .filter_map(|r| r.low_slope.map(|slope| SlopeObservation { timestamp: r.timestamp, slope }))
            .collect())
    }

    /// Records for a chart renderer or other downstream consumer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.rows()?)?)
    }
}

fn optional_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df.column(name)?.cast(&DataType::Float64)?;
    Ok(column.f64()?.into_iter().collect())
}

fn bool_column(df: &DataFrame, name: &str) -> Result<Vec<bool>> {
    Ok(df
        .column(name)?
        .bool()?
        .into_iter()
        .map(|v| v.unwrap_or(false))
        .collect())
}
