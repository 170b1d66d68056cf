use super::trend_series::TrendFrame;
use crate::error::{PeaktrendError, Result};
use crate::types::{PeakKind, TrendRow};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// The most recent turning point of a trend table
#[derive(Debug, Clone, PartialEq)]
pub struct LatestPeak {
    pub kind: PeakKind,
    /// For `HighAndLow` this is the low-side row
    pub row: TrendRow,
}

impl LatestPeak {
    /// Timestamp read as epoch milliseconds
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.row.timestamp)
    }
}

/// Whether the last detected extremum is a swing high, a swing low, or both
/// on the same row.
///
/// On a tie the low-side row is returned. That default is kept for
/// compatibility with existing consumers and may be revisited.
pub fn latest_peak(frame: &TrendFrame) -> Result<LatestPeak> {
    let rows = frame.rows()?;
    let last_high = rows
        .iter()
        .rev()
        .find(|r| r.high_computed)
        .ok_or(PeaktrendError::NoExtremum("high"))?;
    let last_low = rows
        .iter()
        .rev()
        .find(|r| r.low_computed)
        .ok_or(PeaktrendError::NoExtremum("low"))?;

    let (kind, row) = match last_high.timestamp.cmp(&last_low.timestamp) {
        Ordering::Greater => (PeakKind::High, last_high),
        Ordering::Less => (PeakKind::Low, last_low),
        Ordering::Equal => (PeakKind::HighAndLow, last_low),
    };

    Ok(LatestPeak {
        kind,
        row: row.clone(),
    })
}
