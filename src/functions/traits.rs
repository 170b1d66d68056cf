/// Local-maximum search over a numeric sequence.
///
/// Implementations must return ascending, de-duplicated indices into
/// `values`. Minima are found by running the same search on the negated
/// sequence, so an implementation only ever deals with maxima.
pub trait PeakFinder: Send + Sync {
    /// Display name
    fn name(&self) -> &'static str;

    /// Indices of local maxima separated by at least `distance` samples and
    /// standing at least `prominence` above their surroundings
    fn find_maxima(&self, values: &[f64], distance: usize, prominence: f64) -> Vec<usize>;
}
