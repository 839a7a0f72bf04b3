//! Percentage distributions of categorical values
//!
//! A [`Distribution`] is a frequency table normalized to percentages of the
//! observed total, the survey equivalent of a normalized value count.

use std::{borrow::Borrow, collections::BTreeMap};

/// One category of a [`Distribution`].
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionEntry<K> {
    /// The category value.
    pub category: K,
    /// Number of observations in this category.
    pub count: usize,
    /// Share of all observations, in percent (0.0 to 100.0).
    pub percentage: f64,
}

/// Percentage distribution over categories.
///
/// Entries are ordered by descending count, ties broken by ascending
/// category. Percentages of all entries sum to 100 (up to floating-point
/// rounding) unless the distribution is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution<K> {
    /// Total number of observations.
    pub total: usize,
    /// Categories with their counts and percentages.
    pub entries: Vec<DistributionEntry<K>>,
}

impl<K> Distribution<K>
where
    K: Ord,
{
    /// Counts the given observations and normalizes to percentages.
    ///
    /// # Examples
    ///
    /// ```
    /// # use iaq_stats::distribution::Distribution;
    /// let dist = Distribution::from_values(["A", "B", "A"]);
    /// assert_eq!(dist.total, 3);
    /// assert_eq!(dist.entries[0].category, "A");
    /// assert!((dist.percentage_of("A") - 66.667).abs() < 1e-3);
    /// assert!((dist.percentage_of("B") - 33.333).abs() < 1e-3);
    /// assert_eq!(dist.percentage_of("C"), 0.0);
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut counts = BTreeMap::<K, usize>::new();
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
        }
        Self::from_counts(counts)
    }

    /// Normalizes pre-computed category counts to percentages.
    ///
    /// Categories with a zero count are kept with a percentage of zero.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (K, usize)>,
    {
        let mut entries = counts
            .into_iter()
            .map(|(category, count)| DistributionEntry {
                category,
                count,
                percentage: 0.0,
            })
            .collect::<Vec<_>>();
        let total = entries.iter().map(|e| e.count).sum::<usize>();
        if total > 0 {
            for entry in &mut entries {
                entry.percentage = 100.0 * entry.count as f64 / total as f64;
            }
        }
        entries.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.category.cmp(&b.category))
        });
        Self { total, entries }
    }

    /// Returns `true` if no observation was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the entry for `category`, if it was observed.
    #[must_use]
    pub fn get<Q>(&self, category: &Q) -> Option<&DistributionEntry<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .iter()
            .find(|e| Borrow::<Q>::borrow(&e.category) == category)
    }

    /// Returns the percentage of `category`, or `0.0` if it was not observed.
    #[must_use]
    pub fn percentage_of<Q>(&self, category: &Q) -> f64
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(category).map_or(0.0, |e| e.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_distribution() {
        let dist = Distribution::<&str>::from_values([]);
        assert!(dist.is_empty());
        assert!(dist.entries.is_empty());
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let values = ["Student", "Staff", "Student", "Visitor", "Staff", "Student", "Staff"];
        let dist = Distribution::from_values(values);
        let sum = dist.entries.iter().map(|e| e.percentage).sum::<f64>();
        assert!((sum - 100.0).abs() < 1e-9, "sum was {sum}");
    }

    #[test]
    fn test_ordering_by_count_then_category() {
        let dist = Distribution::from_values(["b", "a", "c", "c"]);
        let order = dist.entries.iter().map(|e| e.category).collect::<Vec<_>>();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_from_counts_keeps_zero_categories() {
        let dist = Distribution::from_counts([("x", 3), ("y", 0), ("z", 1)]);
        assert_eq!(dist.total, 4);
        assert_eq!(dist.get("y").map(|e| e.count), Some(0));
        assert_eq!(dist.percentage_of("y"), 0.0);
        assert_eq!(dist.percentage_of("x"), 75.0);
    }

    #[test]
    fn test_from_counts_all_zero() {
        let dist = Distribution::from_counts([("x", 0), ("y", 0)]);
        assert!(dist.is_empty());
        assert!(dist.entries.iter().all(|e| e.percentage == 0.0));
    }
}
