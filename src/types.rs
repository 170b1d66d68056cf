use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Categorical trend label attached to every row of a trend table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendCategory {
    Bullish,
    Bearish,
    Sideways,
    Indeterminate,
}

impl TrendCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Sideways => "sideways",
            Self::Indeterminate => "indeterminate",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Bullish,
            Self::Bearish,
            Self::Sideways,
            Self::Indeterminate,
        ]
    }
}

impl fmt::Display for TrendCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown trend category: {}", s))
    }
}

/// Position and price of a local maximum (highs) or minimum (lows)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremumPoint {
    pub position: usize,
    pub price: f64,
}

/// Slope at one extremum, keyed by the timestamp of the row it sits on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeObservation {
    pub timestamp: i64,
    pub slope: f64,
}

/// A slope value placed on a row. `computed` is false when the value was
/// back-filled from a later extremum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledSlope {
    pub value: f64,
    pub computed: bool,
}

/// One row of the labeled trend table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRow {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub high_slope: Option<f64>,
    pub low_slope: Option<f64>,
    pub high_computed: bool,
    pub low_computed: bool,
    pub trend: TrendCategory,
}

impl TrendRow {
    /// True when this row sits on a freshly detected extremum of either kind
    pub fn has_computed_slope(&self) -> bool {
        self.high_computed || self.low_computed
    }
}

/// Which signal the most recent turning point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeakKind {
    High,
    Low,
    /// High and low extrema share the same timestamp
    HighAndLow,
}

impl PeakKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::HighAndLow => "high&low",
        }
    }
}
