//! Summary Statistics and Grouping
//!
//! The numeric core of the boxplot pipeline and the row partitioning shared
//! by the boxplot and grouped-bar charts.

use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;

/// Quantile of a sorted ascending slice using linear interpolation between
/// closest ranks (the R-7 definition, `h = (n - 1) * p`). Returns `None` for
/// an empty slice.
pub fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let h = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;

    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Five-number summary of a numeric set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Compute the summary from unordered observations. Returns `None` when
    /// the input is empty; a single observation collapses all five numbers
    /// to that value.
    pub fn from_unsorted(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            min: sorted[0],
            q1: quantile(&sorted, 0.25)?,
            median: quantile(&sorted, 0.5)?,
            q3: quantile(&sorted, 0.75)?,
            max: sorted[sorted.len() - 1],
        })
    }

    /// The interquartile range
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Partition rows by a key, preserving insertion order of first occurrence.
/// Every row lands in exactly one group; concatenating the groups in key
/// order reproduces the input multiset.
pub fn group_by<T, K, F>(rows: &[T], key: F) -> IndexMap<K, Vec<&T>>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<&T>> = IndexMap::new();
    for row in rows {
        groups.entry(key(row)).or_default().push(row);
    }
    groups
}

/// Distinct key values in first-occurrence order
pub fn distinct<T, K, F>(rows: &[T], key: F) -> Vec<K>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut keys: IndexSet<K> = IndexSet::new();
    for row in rows {
        keys.insert(key(row));
    }
    keys.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_quantile_empty() {
        assert!(quantile(&[], 0.5).is_none());
    }

    #[test]
    fn test_quantile_single() {
        assert_eq!(quantile(&[42.0], 0.25), Some(42.0));
        assert_eq!(quantile(&[42.0], 0.75), Some(42.0));
    }

    #[test]
    fn test_quantile_interpolates() {
        // h = 3 * 0.5 = 1.5 between 2 and 3
        assert_eq!(quantile(&[1.0, 2.0, 3.0, 4.0], 0.5), Some(2.5));
        // h = 3 * 0.25 = 0.75 between 1 and 2
        assert_eq!(quantile(&[1.0, 2.0, 3.0, 4.0], 0.25), Some(1.75));
    }

    #[test]
    fn test_summary_nine_elements() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let summary = FiveNumberSummary::from_unsorted(&values).unwrap();
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.q1, 3.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.q3, 7.0);
        assert_eq!(summary.max, 9.0);
    }

    #[test]
    fn test_summary_unsorted_input() {
        let values = [9.0, 1.0, 5.0, 3.0, 7.0, 2.0, 8.0, 4.0, 6.0];
        let summary = FiveNumberSummary::from_unsorted(&values).unwrap();
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.iqr(), 4.0);
    }

    #[test]
    fn test_summary_single_observation() {
        let summary = FiveNumberSummary::from_unsorted(&[17.5]).unwrap();
        assert_eq!(summary.min, 17.5);
        assert_eq!(summary.q1, 17.5);
        assert_eq!(summary.median, 17.5);
        assert_eq!(summary.q3, 17.5);
        assert_eq!(summary.max, 17.5);
    }

    #[test]
    fn test_summary_empty() {
        assert!(FiveNumberSummary::from_unsorted(&[]).is_none());
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        platform: &'static str,
        post_type: &'static str,
    }

    #[test]
    fn test_group_by_first_occurrence_order() {
        let rows = [
            Row {
                platform: "A",
                post_type: "x",
            },
            Row {
                platform: "B",
                post_type: "x",
            },
            Row {
                platform: "A",
                post_type: "y",
            },
        ];

        let groups = group_by(&rows, |r| r.platform);
        let keys: Vec<_> = groups.keys().copied().collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(groups["A"], vec![&rows[0], &rows[2]]);
        assert_eq!(groups["B"], vec![&rows[1]]);
    }

    #[test]
    fn test_distinct_preserves_order() {
        let rows = ["video", "image", "video", "link", "image"];
        let keys = distinct(&rows, |r| *r);
        assert_eq!(keys, vec!["video", "image", "link"]);
    }

    proptest! {
        #[test]
        fn summary_is_ordered(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
            let s = FiveNumberSummary::from_unsorted(&values).unwrap();
            prop_assert!(s.min <= s.q1);
            prop_assert!(s.q1 <= s.median);
            prop_assert!(s.median <= s.q3);
            prop_assert!(s.q3 <= s.max);
        }

        #[test]
        fn summary_bounds_match_extrema(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
            let s = FiveNumberSummary::from_unsorted(&values).unwrap();
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert_eq!(s.min, min);
            prop_assert_eq!(s.max, max);
        }

        #[test]
        fn grouping_is_a_partition(keys in prop::collection::vec(0u8..5, 0..100)) {
            let groups = group_by(&keys, |k| *k);

            let total: usize = groups.values().map(|g| g.len()).sum();
            prop_assert_eq!(total, keys.len());

            // Concatenation in key order reproduces the input multiset
            let mut rebuilt: Vec<u8> = groups.values().flatten().map(|k| **k).collect();
            let mut original = keys.clone();
            rebuilt.sort_unstable();
            original.sort_unstable();
            prop_assert_eq!(rebuilt, original);
        }
    }
}
