//! Socio-demographic profile of the respondents (Table 1)

use std::collections::BTreeMap;

use iaq_stats::distribution::Distribution;

use crate::{
    config::DemographicsConfig,
    dataset::{Column, ColumnError, Table},
};

/// Percentage distributions of status, gender and exposure duration.
#[derive(Debug, Clone, PartialEq)]
pub struct DemographicSummary {
    pub status: Distribution<String>,
    pub gender: Distribution<String>,
    /// Distribution over the canonical duration bins. Every configured
    /// bin is present, observed or not.
    pub duration: Distribution<String>,
    /// Raw duration answers with no configured bin, with their row counts.
    /// These rows are excluded from [`Self::duration`].
    pub unmapped_durations: BTreeMap<String, usize>,
}

impl DemographicSummary {
    pub fn from_table(table: &Table, config: &DemographicsConfig) -> Result<Self, ColumnError> {
        let status = table.column(&config.status_column)?;
        let gender = table.column(&config.gender_column)?;
        let duration = table.column(&config.duration_column)?;

        let mut bin_counts = config
            .duration_bins
            .canonical_bins()
            .into_iter()
            .map(|bin| (bin.to_owned(), 0))
            .collect::<BTreeMap<String, usize>>();
        let mut unmapped_durations = BTreeMap::<String, usize>::new();
        for raw in duration.cells().flatten() {
            match config.duration_bins.bin_for(raw) {
                Some(bin) => *bin_counts.entry(bin.to_owned()).or_insert(0) += 1,
                None => *unmapped_durations.entry(raw.to_owned()).or_insert(0) += 1,
            }
        }

        if !unmapped_durations.is_empty() {
            let excluded = unmapped_durations.values().sum::<usize>();
            tracing::warn!(
                column = duration.name(),
                excluded,
                labels = ?unmapped_durations.keys().collect::<Vec<_>>(),
                "duration answers without a configured bin were excluded"
            );
        }

        Ok(Self {
            status: categorical_distribution(status),
            gender: categorical_distribution(gender),
            duration: Distribution::from_counts(bin_counts),
            unmapped_durations,
        })
    }

    /// Number of rows excluded from the duration distribution.
    #[must_use]
    pub fn unmapped_duration_count(&self) -> usize {
        self.unmapped_durations.values().sum()
    }
}

/// Distribution of the non-missing values of a column.
#[must_use]
pub fn categorical_distribution(column: Column<'_>) -> Distribution<String> {
    Distribution::from_values(column.cells().flatten().map(str::to_owned))
}
