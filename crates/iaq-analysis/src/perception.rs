//! Environmental perception of indoor stressors (Table 2)

use iaq_stats::distribution::Distribution;

use crate::{
    config::PerceptionConfig,
    dataset::{Column, ColumnError, Table},
    response::Response,
};

/// Frequency breakdown of one stressor.
#[derive(Debug, Clone, PartialEq)]
pub struct StressorFrequency {
    pub label: String,
    pub column: String,
    /// Distribution over `Present` (often/always), `Intermediate`
    /// (sometimes) and `Absent` (rarely/never).
    pub distribution: Distribution<Response>,
    /// Non-missing answers that decoded to [`Response::Unknown`].
    pub unrecognized: usize,
}

impl StressorFrequency {
    /// Decodes the column and counts each frequency bucket.
    ///
    /// Numeric and textual answers for the same bucket (`1` and `Yes`,
    /// `0` and `No`) are counted together.
    #[must_use]
    pub fn from_column(label: &str, column: Column<'_>) -> Self {
        let mut counts = [
            (Response::Present, 0),
            (Response::Intermediate, 0),
            (Response::Absent, 0),
        ];
        let mut unrecognized = 0;
        for value in column.cells().flatten() {
            let response = Response::decode(value);
            match counts.iter_mut().find(|(r, _)| *r == response) {
                Some((_, count)) => *count += 1,
                None => unrecognized += 1,
            }
        }
        if unrecognized > 0 {
            tracing::warn!(
                stressor = label,
                column = column.name(),
                unrecognized,
                "answers with an unrecognized code were excluded"
            );
        }

        Self {
            label: label.to_owned(),
            column: column.name().to_owned(),
            distribution: Distribution::from_counts(counts),
            unrecognized,
        }
    }

    /// Number of answers counted in the buckets.
    #[must_use]
    pub fn responses(&self) -> usize {
        self.distribution.total
    }

    fn share(&self, response: Response) -> Option<f64> {
        (!self.distribution.is_empty()).then(|| self.distribution.percentage_of(&response))
    }

    /// Percentage answering "often/always", `None` without answers.
    #[must_use]
    pub fn often_always(&self) -> Option<f64> {
        self.share(Response::Present)
    }

    /// Percentage answering "sometimes", `None` without answers.
    #[must_use]
    pub fn sometimes(&self) -> Option<f64> {
        self.share(Response::Intermediate)
    }

    /// Percentage answering "rarely/never", `None` without answers.
    #[must_use]
    pub fn rarely_never(&self) -> Option<f64> {
        self.share(Response::Absent)
    }
}

/// Perception breakdown for all configured stressors.
#[derive(Debug, Clone, PartialEq)]
pub struct PerceptionSummary {
    pub stressors: Vec<StressorFrequency>,
}

impl PerceptionSummary {
    pub fn from_table(table: &Table, config: &PerceptionConfig) -> Result<Self, ColumnError> {
        let columns = config
            .stressors
            .iter()
            .map(|s| Ok((s.label.as_str(), table.column(&s.column)?)))
            .collect::<Result<Vec<_>, ColumnError>>()?;

        let stressors = columns
            .into_iter()
            .map(|(label, column)| StressorFrequency::from_column(label, column))
            .collect();
        Ok(Self { stressors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LabeledColumn;

    fn config() -> PerceptionConfig {
        PerceptionConfig {
            stressors: vec![LabeledColumn::new("Noise", "Environment [Noise]")],
        }
    }

    fn frequency(values: &[&str]) -> StressorFrequency {
        let csv = format!("Environment [Noise]\n{}\n", values.join("\n"));
        let table = Table::from_reader(csv.as_bytes()).unwrap();
        let summary = PerceptionSummary::from_table(&table, &config()).unwrap();
        summary.stressors.into_iter().next().unwrap()
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("percentage should be defined");
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_numeric_codes() {
        let f = frequency(&["1", "1", "2", "0"]);
        assert_eq!(f.responses(), 4);
        assert_close(f.often_always(), 50.0);
        assert_close(f.sometimes(), 25.0);
        assert_close(f.rarely_never(), 25.0);
    }

    #[test]
    fn test_mixed_encodings_are_summed() {
        let f = frequency(&["1", "Yes", "0", "No", "2", "Yes", "No", "No"]);
        assert_close(f.often_always(), 37.5);
        assert_close(f.sometimes(), 12.5);
        assert_close(f.rarely_never(), 50.0);
    }

    #[test]
    fn test_unrecognized_and_missing_answers_are_excluded() {
        let f = frequency(&["1", "3", "", "0", "Often", "NA"]);
        assert_eq!(f.responses(), 2);
        assert_eq!(f.unrecognized, 2);
        assert_close(f.often_always(), 50.0);
        assert_close(f.sometimes(), 0.0);
        assert_close(f.rarely_never(), 50.0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let f = frequency(&["1", "2", "2", "0", "Yes", "No", "2"]);
        let sum = f.often_always().unwrap() + f.sometimes().unwrap() + f.rarely_never().unwrap();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_answers_is_undefined() {
        let f = frequency(&["NA", "Maybe"]);
        assert_eq!(f.responses(), 0);
        assert_eq!(f.often_always(), None);
        assert_eq!(f.sometimes(), None);
        assert_eq!(f.rarely_never(), None);
    }

    #[test]
    fn test_default_stressors_in_order() {
        let csv = "\"Environment [Stuffy \"\"bad\"\" air]\",Environment [Room temperature too high],Environment [Noise]\n1,2,0\n";
        let table = Table::from_reader(csv.as_bytes()).unwrap();
        let summary = PerceptionSummary::from_table(&table, &PerceptionConfig::default()).unwrap();
        let labels = summary
            .stressors
            .iter()
            .map(|s| s.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["Stuffy Air", "High Temp", "Noise"]);
        assert_eq!(summary.stressors[0].often_always(), Some(100.0));
        assert_eq!(summary.stressors[1].sometimes(), Some(100.0));
        assert_eq!(summary.stressors[2].rarely_never(), Some(100.0));
    }

    #[test]
    fn test_missing_column() {
        let table = Table::from_reader("Floor\n1\n".as_bytes()).unwrap();
        let err = PerceptionSummary::from_table(&table, &config()).unwrap_err();
        assert_eq!(
            err,
            ColumnError::Missing {
                name: "Environment [Noise]".to_owned()
            }
        );
    }
}
