use anyhow::{Context, Result, bail};

use super::model::Dataset;

/// Histogram bin count for the label distribution figure.
pub const HISTOGRAM_BINS: usize = 100;

// ---------------------------------------------------------------------------
// Basic descriptive statistics
// ---------------------------------------------------------------------------

/// Arithmetic mean. `None` for an empty series.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of a **sorted** series; the average of the two middle values for
/// an even length. `None` for an empty series.
pub fn median_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Percentile of a **sorted** series with linear interpolation between
/// order statistics (the numpy default). `p` is in `[0, 100]`.
pub fn percentile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let rank = (p / 100.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let frac = rank - lo as f64;
    if lo + 1 >= n {
        return Some(sorted[n - 1]);
    }
    Some(sorted[lo] + frac * (sorted[lo + 1] - sorted[lo]))
}

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

/// Equal-width bin counts over `[min, max]`.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Lower edge of the first bin.
    pub min: f64,
    /// Upper edge of the last bin.
    pub max: f64,
    /// Width of every bin.
    pub bin_width: f64,
    /// Occupancy per bin.
    pub counts: Vec<u64>,
}

impl Histogram {
    /// Bin `values` (finite, non-empty) into `n_bins` equal-width bins.
    /// The maximum value lands in the last bin. A constant series is
    /// binned over a unit-width range centered on the value.
    pub fn from_values(values: &[f64], n_bins: usize) -> Option<Self> {
        if values.is_empty() || n_bins == 0 {
            return None;
        }
        let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let bin_width = (hi - lo) / n_bins as f64;

        let mut counts = vec![0u64; n_bins];
        for &v in values {
            let idx = (((v - lo) / bin_width) as usize).min(n_bins - 1);
            counts[idx] += 1;
        }

        Some(Histogram {
            min: lo,
            max: hi,
            bin_width,
            counts,
        })
    }

    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    /// Center of the `i`-th bin, for bar placement.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.min + (i as f64 + 0.5) * self.bin_width
    }
}

// ---------------------------------------------------------------------------
// Boxplot statistics
// ---------------------------------------------------------------------------

/// Box-and-whisker statistics with matplotlib's defaults: whiskers reach
/// the most extreme data points within 1.5×IQR of the quartiles, anything
/// beyond is an outlier.
#[derive(Debug, Clone)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let q1 = percentile_sorted(sorted, 25.0)?;
        let median = median_sorted(sorted)?;
        let q3 = percentile_sorted(sorted, 75.0)?;

        let iqr = q3 - q1;
        let fence_low = q1 - 1.5 * iqr;
        let fence_high = q3 + 1.5 * iqr;

        let mut whisker_low = q1;
        let mut whisker_high = q3;
        let mut outliers = Vec::new();
        for &v in sorted {
            if v < fence_low || v > fence_high {
                outliers.push(v);
            } else {
                whisker_low = whisker_low.min(v);
                whisker_high = whisker_high.max(v);
            }
        }

        Some(BoxStats {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

// ---------------------------------------------------------------------------
// LabelSummary – everything the figure and panels need
// ---------------------------------------------------------------------------

/// Distribution summary of a dataset's label (last) column, computed once
/// at load time.
#[derive(Debug, Clone)]
pub struct LabelSummary {
    /// Label column name.
    pub column: String,
    /// Number of finite values.
    pub count: usize,
    /// Number of missing (null) values dropped before computing statistics.
    pub n_missing: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub histogram: Histogram,
    pub box_stats: BoxStats,
}

impl LabelSummary {
    /// Extract the label column and compute its distribution summary.
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let column = dataset
            .label_name()
            .context("dataset has no columns")?
            .to_string();
        let raw = dataset.label_values()?;

        let mut values: Vec<f64> = raw.iter().copied().filter(|v| v.is_finite()).collect();
        let n_missing = raw.len() - values.len();
        if values.is_empty() {
            bail!("label column '{column}' has no numeric values");
        }
        values.sort_by(|a, b| a.total_cmp(b));

        let mean = mean(&values).context("empty label series")?;
        let median = median_sorted(&values).context("empty label series")?;
        let histogram = Histogram::from_values(&values, HISTOGRAM_BINS)
            .context("failed to bin label values")?;
        let box_stats =
            BoxStats::from_sorted(&values).context("failed to compute box statistics")?;

        Ok(LabelSummary {
            column,
            count: values.len(),
            n_missing,
            mean,
            median,
            min: values[0],
            max: values[values.len() - 1],
            histogram,
            box_stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    #[test]
    fn mean_matches_reference() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median_sorted(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(median_sorted(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(median_sorted(&[7.0]), Some(7.0));
    }

    #[test]
    fn percentile_interpolates_like_numpy() {
        let s = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile_sorted(&s, 25.0), Some(1.75));
        assert_eq!(percentile_sorted(&s, 75.0), Some(3.25));
        assert_eq!(percentile_sorted(&s, 0.0), Some(1.0));
        assert_eq!(percentile_sorted(&s, 100.0), Some(4.0));

        let s = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile_sorted(&s, 25.0), Some(2.0));
        assert_eq!(percentile_sorted(&s, 75.0), Some(4.0));
    }

    #[test]
    fn histogram_honors_bin_count() {
        let values: Vec<f64> = (0..1000).map(|i| i as f64).collect();
        let h = Histogram::from_values(&values, HISTOGRAM_BINS).unwrap();
        assert_eq!(h.n_bins(), 100);
        assert_eq!(h.counts.iter().sum::<u64>(), 1000);
        // 10 values per bin for an even spread
        assert!(h.counts.iter().all(|&c| c == 10));
    }

    #[test]
    fn histogram_max_value_lands_in_last_bin() {
        let h = Histogram::from_values(&[0.0, 1.0, 2.0, 10.0], 10).unwrap();
        assert_eq!(h.counts[9], 1);
        assert_eq!(h.counts.iter().sum::<u64>(), 4);
    }

    #[test]
    fn histogram_constant_series() {
        let h = Histogram::from_values(&[3.0; 7], 100).unwrap();
        assert_eq!(h.counts.iter().sum::<u64>(), 7);
        assert_eq!(h.counts.iter().filter(|&&c| c > 0).count(), 1);
        assert!((h.max - h.min - 1.0).abs() < 1e-12);
    }

    #[test]
    fn box_stats_split_whiskers_and_outliers() {
        let mut s: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        s.push(100.0);
        let b = BoxStats::from_sorted(&s).unwrap();
        assert_eq!(b.median, 6.0);
        assert_eq!(b.q1, 3.5);
        assert_eq!(b.q3, 8.5);
        assert_eq!(b.whisker_low, 1.0);
        assert_eq!(b.whisker_high, 10.0);
        assert_eq!(b.outliers, vec![100.0]);
    }

    #[test]
    fn box_stats_no_outliers() {
        let s: Vec<f64> = (1..=9).map(|i| i as f64).collect();
        let b = BoxStats::from_sorted(&s).unwrap();
        assert_eq!(b.whisker_low, 1.0);
        assert_eq!(b.whisker_high, 9.0);
        assert!(b.outliers.is_empty());
    }

    #[test]
    fn summary_from_dataset_drops_missing() {
        let rows = vec![
            vec![CellValue::Integer(1), CellValue::Float(10.0)],
            vec![CellValue::Integer(2), CellValue::Null],
            vec![CellValue::Integer(3), CellValue::Float(20.0)],
            vec![CellValue::Integer(4), CellValue::Float(30.0)],
        ];
        let ds = Dataset::new(vec!["day".into(), "rentals".into()], rows);
        let s = LabelSummary::from_dataset(&ds).unwrap();
        assert_eq!(s.column, "rentals");
        assert_eq!(s.count, 3);
        assert_eq!(s.n_missing, 1);
        assert_eq!(s.mean, 20.0);
        assert_eq!(s.median, 20.0);
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 30.0);
    }

    #[test]
    fn summary_rejects_all_missing_label() {
        let rows = vec![vec![CellValue::Integer(1), CellValue::Null]];
        let ds = Dataset::new(vec!["day".into(), "rentals".into()], rows);
        assert!(LabelSummary::from_dataset(&ds).is_err());
    }
}
