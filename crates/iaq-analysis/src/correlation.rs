//! Working conditions against symptoms (Table 4)

use iaq_stats::correlation::{Correlation, pearson};

use crate::{
    config::CorrelationConfig,
    dataset::{Column, ColumnError, Table},
    response::decode_signal,
};

/// Correlation of one (condition, symptom) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionSymptomCorrelation {
    pub condition: String,
    pub symptom: String,
    pub correlation: Correlation,
}

/// All configured (condition, symptom) pairs, conditions outermost.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub pairs: Vec<ConditionSymptomCorrelation>,
}

impl CorrelationMatrix {
    pub fn from_table(table: &Table, config: &CorrelationConfig) -> Result<Self, ColumnError> {
        let conditions = config
            .conditions
            .iter()
            .map(|c| table.column(c))
            .collect::<Result<Vec<_>, _>>()?;
        let symptoms = config
            .symptoms
            .iter()
            .map(|s| table.column(s))
            .collect::<Result<Vec<_>, _>>()?;

        let mut pairs = Vec::with_capacity(conditions.len() * symptoms.len());
        for condition in &conditions {
            for symptom in &symptoms {
                let (xs, ys) = paired_signals(*condition, *symptom);
                let correlation = pearson(&xs, &ys);
                if let Correlation::Undefined(reason) = &correlation {
                    tracing::debug!(
                        condition = condition.name(),
                        symptom = symptom.name(),
                        %reason,
                        "correlation undefined"
                    );
                }
                pairs.push(ConditionSymptomCorrelation {
                    condition: condition.name().to_owned(),
                    symptom: symptom.name().to_owned(),
                    correlation,
                });
            }
        }
        Ok(Self { pairs })
    }

    /// Looks up the correlation of a pair by column names.
    #[must_use]
    pub fn get(&self, condition: &str, symptom: &str) -> Option<&Correlation> {
        self.pairs
            .iter()
            .find(|p| p.condition == condition && p.symptom == symptom)
            .map(|p| &p.correlation)
    }
}

/// Decodes the rows where both columns hold a value.
///
/// Rows missing either value are dropped; the remaining cells go through
/// [`decode_signal`].
#[must_use]
pub fn paired_signals(x: Column<'_>, y: Column<'_>) -> (Vec<f64>, Vec<f64>) {
    x.cells()
        .zip(y.cells())
        .filter_map(|(x, y)| Some((decode_signal(x?), decode_signal(y?))))
        .unzip()
}
