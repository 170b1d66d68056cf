use super::traits::PeakFinder;
use crate::config::{DetectionConfig, PeakBackend};
use crate::types::ExtremumPoint;
use ::find_peaks::PeakFinder as CratePeakFinder;

/// Prominence-based peak search.
///
/// Candidates are interior samples that rise above the left neighbour and
/// fall off to the right, with flat tops reported at their midpoint. The
/// distance filter runs first (highest peaks win), then every survivor must
/// stand at least `prominence` above the higher of its two bases.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProminencePeakFinder;

impl PeakFinder for ProminencePeakFinder {
    fn name(&self) -> &'static str {
        "builtin"
    }

    fn find_maxima(&self, values: &[f64], distance: usize, prominence: f64) -> Vec<usize> {
        let candidates = local_maxima(values);
        let spaced = select_by_distance(values, &candidates, distance);

        spaced
            .into_iter()
            .filter(|&peak| peak_prominence(values, peak) >= prominence)
            .collect()
    }
}

/// Adapter over the `find_peaks` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct FindPeaksAdapter;

impl PeakFinder for FindPeaksAdapter {
    fn name(&self) -> &'static str {
        "find_peaks"
    }

    fn find_maxima(&self, values: &[f64], distance: usize, prominence: f64) -> Vec<usize> {
        if values.len() < 3 {
            return Vec::new();
        }

        let last = values.len() - 1;
        let mut indices: Vec<usize> = CratePeakFinder::new(values)
            .with_min_prominence(prominence)
            .with_min_distance(distance)
            .find_peaks()
            .into_iter()
            // `position` is the half-open plateau range; take its midpoint
            // rounding down, as the built-in finder does
            .map(|peak| (peak.position.start + peak.position.end - 1) / 2)
            .filter(|&i| i > 0 && i < last)
            .collect();

        // The crate orders by prominence
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

fn local_maxima(x: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if x.len() < 3 {
        return peaks;
    }

    let i_max = x.len() - 1;
    let mut i = 1;
    while i < i_max {
        if x[i - 1] < x[i] {
            let mut ahead = i + 1;
            while ahead < i_max && x[ahead] == x[i] {
                ahead += 1;
            }
            if x[ahead] < x[i] {
                peaks.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }
        i += 1;
    }

    peaks
}

fn select_by_distance(x: &[f64], peaks: &[usize], distance: usize) -> Vec<usize> {
    if distance <= 1 || peaks.len() < 2 {
        return peaks.to_vec();
    }

    let mut keep = vec![true; peaks.len()];
    let mut priority: Vec<usize> = (0..peaks.len()).collect();
    priority.sort_by(|&a, &b| x[peaks[a]].total_cmp(&x[peaks[b]]));

    for &j in priority.iter().rev() {
        if !keep[j] {
            continue;
        }

        let mut k = j;
        while k > 0 && peaks[j] - peaks[k - 1] < distance {
            keep[k - 1] = false;
            k -= 1;
        }

        let mut k = j + 1;
        while k < peaks.len() && peaks[k] - peaks[j] < distance {
            keep[k] = false;
            k += 1;
        }
    }

    peaks
        .iter()
        .zip(keep)
        .filter_map(|(&peak, kept)| kept.then_some(peak))
        .collect()
}

fn peak_prominence(x: &[f64], peak: usize) -> f64 {
    let height = x[peak];
    let not_higher = |v: f64| v <= height;

    let mut left_min = height;
    let mut i = peak;
    while not_higher(x[i]) {
        left_min = left_min.min(x[i]);
        if i == 0 {
            break;
        }
        i -= 1;
    }

    let mut right_min = height;
    let mut i = peak;
    while i < x.len() && not_higher(x[i]) {
        right_min = right_min.min(x[i]);
        i += 1;
    }

    height - left_min.max(right_min)
}

/// Finds peaks in highs and troughs in lows under one detection policy
pub struct ExtremaDetector {
    config: DetectionConfig,
    finder: Box<dyn PeakFinder>,
}

impl ExtremaDetector {
    pub fn new(config: DetectionConfig) -> Self {
        let finder: Box<dyn PeakFinder> = match config.backend {
            PeakBackend::Builtin => Box::new(ProminencePeakFinder),
            PeakBackend::FindPeaks => Box::new(FindPeaksAdapter),
        };
        Self { config, finder }
    }

    pub fn with_finder(config: DetectionConfig, finder: Box<dyn PeakFinder>) -> Self {
        Self { config, finder }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub fn finder_name(&self) -> &'static str {
        self.finder.name()
    }

    /// Ascending indices of local maxima
    pub fn find_peaks(&self, values: &[f64]) -> Vec<usize> {
        self.finder
            .find_maxima(values, self.config.distance, self.config.prominence)
    }

    /// Ascending indices of local minima, found as maxima of the negated series
    pub fn find_troughs(&self, values: &[f64]) -> Vec<usize> {
        let inverted: Vec<f64> = values.iter().map(|v| -v).collect();
        self.find_peaks(&inverted)
    }

    pub fn extremum_points(values: &[f64], indices: &[usize]) -> Vec<ExtremumPoint> {
        indices
            .iter()
            .map(|&position| ExtremumPoint {
                position,
                price: values[position],
            })
            .collect()
    }
}

pub fn find_peaks(values: &[f64], config: &DetectionConfig) -> Vec<usize> {
    ExtremaDetector::new(config.clone()).find_peaks(values)
}

pub fn find_troughs(values: &[f64], config: &DetectionConfig) -> Vec<usize> {
    ExtremaDetector::new(config.clone()).find_troughs(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector(prominence: f64, distance: usize) -> ExtremaDetector {
        ExtremaDetector::new(DetectionConfig::new(prominence, distance))
    }

    #[test]
    fn test_simple_peaks() {
        let highs = [1.0, 2.0, 1.0, 3.0, 1.0, 4.0, 1.0];
        assert_eq!(detector(0.0, 1).find_peaks(&highs), vec![1, 3, 5]);
    }

    #[test]
    fn test_troughs_index_original_series() {
        let lows = [5.0, 3.0, 6.0, 2.0, 7.0];
        let troughs = detector(0.0, 1).find_troughs(&lows);
        assert_eq!(troughs, vec![1, 3]);
        assert_eq!(lows[troughs[1]], 2.0);
    }

    #[test]
    fn test_plateau_reports_midpoint() {
        let values = [0.0, 1.0, 3.0, 3.0, 3.0, 1.0, 0.0];
        assert_eq!(local_maxima(&values), vec![3]);

        // Plateau of even width rounds down
        let values = [0.0, 3.0, 3.0, 0.0];
        assert_eq!(local_maxima(&values), vec![1]);
    }

    #[test]
    fn test_edges_never_peaks() {
        let values = [9.0, 1.0, 2.0, 1.0, 9.0];
        assert_eq!(local_maxima(&values), vec![2]);
    }

    #[test]
    fn test_short_and_monotone_inputs() {
        let d = detector(0.0, 1);
        assert!(d.find_peaks(&[]).is_empty());
        assert!(d.find_peaks(&[1.0]).is_empty());
        assert!(d.find_peaks(&[1.0, 2.0]).is_empty());
        assert!(d.find_peaks(&[1.0, 2.0, 3.0, 4.0]).is_empty());
        assert!(d.find_troughs(&[1.0, 2.0, 3.0, 4.0]).is_empty());
    }

    #[test]
    fn test_prominence() {
        // Peak at 1 drops to 0 on the left but only to 9 on the right
        // before the walk meets the higher sample at 5.
        let values = [0.0, 10.0, 9.0, 9.5, 9.0, 20.0, 0.0];
        assert_eq!(peak_prominence(&values, 1), 1.0);
        assert_eq!(peak_prominence(&values, 3), 0.5);
        assert_eq!(peak_prominence(&values, 5), 20.0);

        assert_eq!(detector(0.0, 1).find_peaks(&values), vec![1, 3, 5]);
        assert_eq!(detector(1.0, 1).find_peaks(&values), vec![1, 5]);
        assert_eq!(detector(5.0, 1).find_peaks(&values), vec![5]);
    }

    #[test]
    fn test_distance_keeps_higher_peak() {
        let values = [0.0, 5.0, 0.0, 8.0, 0.0, 6.0, 0.0];
        assert_eq!(detector(0.0, 1).find_peaks(&values), vec![1, 3, 5]);
        assert_eq!(detector(0.0, 3).find_peaks(&values), vec![3]);
        assert_eq!(detector(0.0, 2).find_peaks(&values), vec![1, 3, 5]);
    }

    #[test]
    fn test_nan_never_peak() {
        let values = [0.0, f64::NAN, 0.0, 2.0, 0.0];
        assert_eq!(detector(0.0, 1).find_peaks(&values), vec![3]);
    }

    #[test]
    fn test_find_peaks_adapter_contract() {
        let values = [1.0, 4.0, 1.0, 3.0, 0.0, 6.0, 2.0, 5.0, 1.0];
        let config = DetectionConfig {
            backend: PeakBackend::FindPeaks,
            ..DetectionConfig::new(0.0, 1)
        };
        let d = ExtremaDetector::new(config);
        assert_eq!(d.finder_name(), "find_peaks");

        let peaks = d.find_peaks(&values);
        assert!(peaks.windows(2).all(|w| w[0] < w[1]));
        assert!(peaks.iter().all(|&i| i > 0 && i < values.len() - 1));
    }

    #[test]
    fn test_backends_agree_on_plateaus() {
        let inputs: [&[f64]; 5] = [
            &[1.0, 2.0, 1.0, 3.0, 1.0, 4.0, 1.0],
            &[0.0, 3.0, 3.0, 0.0],
            &[0.0, 1.0, 3.0, 3.0, 3.0, 1.0, 0.0],
            &[0.0, 5.0, 5.0, 5.0, 5.0, 0.0, 2.0, 2.0, 0.0],
            &[4.0, 1.0, 6.0, 6.0, 2.0, 7.0, 3.0, 3.0, 3.0, 3.0, 8.0],
        ];

        for values in inputs {
            let builtin = ProminencePeakFinder.find_maxima(values, 1, 0.0);
            let adapter = FindPeaksAdapter.find_maxima(values, 1, 0.0);
            assert_eq!(builtin, adapter, "peaks differ for {:?}", values);
        }

        assert_eq!(FindPeaksAdapter.find_maxima(&[0.0, 3.0, 3.0, 0.0], 1, 0.0), vec![1]);
    }

    #[test]
    fn test_extremum_points() {
        let values = [1.0, 2.0, 1.0, 3.0, 1.0];
        let points = ExtremaDetector::extremum_points(&values, &[1, 3]);
        assert_eq!(
            points,
            vec![
                ExtremumPoint { position: 1, price: 2.0 },
                ExtremumPoint { position: 3, price: 3.0 },
            ]
        );
    }
}
