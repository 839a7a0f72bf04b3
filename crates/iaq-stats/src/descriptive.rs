/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency and dispersion
/// for a dataset of `f64` values, such as a single sensor channel.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    ///
    /// Always within `min..=max`.
    pub mean: f64,
    /// The median value of the dataset (upper median for even counts).
    pub median: f64,
    /// The population standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    /// NaN values must be filtered out by the caller.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values. The values will be collected and sorted internally.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use iaq_stats::descriptive::DescriptiveStats;
    /// let values = [420.0, 1500.0, 400.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 400.0);
    /// assert_eq!(stats.max, 1500.0);
    /// assert!((stats.mean - 773.333).abs() < 1e-3);
    /// assert_eq!(stats.median, 420.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use iaq_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::from_sorted(&[12.5]).unwrap();
    /// assert_eq!(stats.min, 12.5);
    /// assert_eq!(stats.mean, 12.5);
    /// assert_eq!(stats.max, 12.5);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let sum = sorted_values.iter().copied().sum::<f64>();
        // Summation rounding can push the mean just outside the observed range
        let mean = (sum / n).clamp(min, max);
        let median = sorted_values[count / 2];
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            std_dev,
        })
    }
}
