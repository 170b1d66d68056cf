use crate::types::{ExtremumPoint, SlopeObservation};

/// Angle of the line joining each extremum to its predecessor, in radians.
///
/// The first point has no predecessor and gets `0.0`. Positions must be
/// strictly increasing so the run is never zero.
pub fn compute_slopes(points: &[ExtremumPoint]) -> Vec<f64> {
    let mut slopes = Vec::with_capacity(points.len());
    if points.is_empty() {
        return slopes;
    }

    slopes.push(0.0);
    for pair in points.windows(2) {
        debug_assert!(pair[1].position > pair[0].position);
        let rise = pair[1].price - pair[0].price;
        let run = (pair[1].position - pair[0].position) as f64;
        slopes.push((rise / run).atan());
    }

    slopes
}

/// Pair every extremum's slope with the timestamp of the row it sits on
pub fn slope_observations(timestamps: &[i64], points: &[ExtremumPoint]) -> Vec<SlopeObservation> {
    compute_slopes(points)
        .into_iter()
        .zip(points)
        .map(|(slope, point)| SlopeObservation {
            timestamp: timestamps[point.position],
            slope,
        })
        .collect()
}
