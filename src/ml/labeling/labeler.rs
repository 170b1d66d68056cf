use crate::types::TrendCategory;

/// Combine a high-side and a low-side slope into one trend label.
///
/// A missing (or NaN) slope on either side gives `Indeterminate`, as does a
/// pair of exact zeros. Both rising is bullish, both falling is bearish, and
/// everything else (mixed signs, one zero) is sideways.
pub fn label(high_slope: Option<f64>, low_slope: Option<f64>) -> TrendCategory {
    let (high, low) = match (
        high_slope.filter(|v| !v.is_nan()),
        low_slope.filter(|v| !v.is_nan()),
    ) {
        (Some(high), Some(low)) => (high, low),
        _ => return TrendCategory::Indeterminate,
    };

    if high == 0.0 && low == 0.0 {
        TrendCategory::Indeterminate
    } else if high > 0.0 && low > 0.0 {
        TrendCategory::Bullish
    } else if high < 0.0 && low < 0.0 {
        TrendCategory::Bearish
    } else {
        TrendCategory::Sideways
    }
}
