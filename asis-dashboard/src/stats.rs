//! Distributions backing the histogram and pie charts.

use asis_types::{HistogramBin, ValueCount};

/// Equal-width histogram over `[min, max]` with `bins` buckets.
///
/// Buckets are half-open except the last, which also takes `max`. When every
/// value is equal the range is widened to `[v - 0.5, v + 0.5]`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if min == max { (min - 0.5, max + 0.5) } else { (min, max) };
    let width = (hi - lo) / bins as f64;

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

/// Count distinct values, most frequent first; ties keep first-seen order.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<ValueCount> {
    let mut counts: Vec<ValueCount> = Vec::new();
    for v in values {
        match counts.iter_mut().find(|c| c.value == v) {
            Some(c) => c.count += 1,
            None => counts.push(ValueCount {
                value: v.to_string(),
                count: 1,
            }),
        }
    }
    // stable sort
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_positions_spread_over_ten_bins() {
        let bins = histogram(&[3.0, 7.0, 12.0, 5.0, 9.0], 10);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].start, 3.0);
        assert_eq!(bins[9].end, 12.0);
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 5);
        // max lands in the closed last bucket
        assert_eq!(bins[9].count, 1);
    }

    #[test]
    fn constant_values_fill_one_bucket() {
        let bins = histogram(&[4.0, 4.0], 2);
        assert_eq!(bins[0].start, 3.5);
        assert_eq!(bins[1].end, 4.5);
        assert_eq!(bins[1].count, 2);
    }

    #[test]
    fn empty_input_has_no_buckets() {
        assert!(histogram(&[], 10).is_empty());
        assert!(histogram(&[1.0], 0).is_empty());
    }

    #[test]
    fn counts_sorted_by_frequency() {
        let counts = value_counts(["Active", "Active", "Lost", "Active", "Active"]);
        assert_eq!(
            counts,
            vec![
                ValueCount { value: "Active".into(), count: 4 },
                ValueCount { value: "Lost".into(), count: 1 },
            ]
        );
    }
}
