//! Symptom prevalence cross-tabulated by floor (Table 3)

use std::collections::BTreeMap;

use crate::{
    config::SymptomMatrixConfig,
    dataset::{ColumnError, Table},
    response::Response,
};

/// Counts behind one floor × symptom cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrevalenceCount {
    /// Rows reporting the symptom as present.
    pub present: usize,
    /// Rows with a decodable answer for the symptom.
    pub observed: usize,
}

impl PrevalenceCount {
    /// Prevalence in percent, `None` when nothing was observed.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        (self.observed > 0).then(|| 100.0 * self.present as f64 / self.observed as f64)
    }
}

/// Floor × symptom prevalence matrix.
///
/// Floors are ordered by label; symptoms keep configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomMatrix {
    pub symptoms: Vec<String>,
    /// Per floor, one count per entry of [`Self::symptoms`].
    pub floors: BTreeMap<String, Vec<PrevalenceCount>>,
}

impl SymptomMatrix {
    /// Builds the matrix.
    ///
    /// Rows without a floor are skipped. Within a floor, rows with a
    /// missing or undecodable symptom answer are left out of that cell's
    /// numerator and denominator.
    pub fn from_table(table: &Table, config: &SymptomMatrixConfig) -> Result<Self, ColumnError> {
        let floor_column = table.column(&config.floor_column)?;
        let symptom_columns = config
            .symptoms
            .iter()
            .map(|s| table.column(s))
            .collect::<Result<Vec<_>, _>>()?;

        let floor_labels = floor_column.cells().collect::<Vec<_>>();
        let mut floors = BTreeMap::<String, Vec<PrevalenceCount>>::new();
        for floor in floor_labels.iter().flatten() {
            floors
                .entry((*floor).to_owned())
                .or_insert_with(|| vec![PrevalenceCount::default(); symptom_columns.len()]);
        }

        let skipped = floor_labels.iter().filter(|f| f.is_none()).count();
        if skipped > 0 {
            tracing::debug!(
                column = floor_column.name(),
                skipped,
                "rows without a floor were skipped"
            );
        }

        for (symptom_index, column) in symptom_columns.iter().enumerate() {
            for (floor, value) in floor_labels.iter().zip(column.cells()) {
                let (Some(floor), Some(value)) = (floor, value) else {
                    continue;
                };
                let response = Response::decode(value);
                if !response.is_known() {
                    continue;
                }
                // Every floor label was inserted above
                let Some(counts) = floors.get_mut(*floor) else {
                    continue;
                };
                let cell = &mut counts[symptom_index];
                cell.observed += 1;
                if response == Response::Present {
                    cell.present += 1;
                }
            }
        }

        Ok(Self {
            symptoms: config.symptoms.clone(),
            floors,
        })
    }

    /// Prevalence of `symptom` on `floor`, in percent.
    ///
    /// `None` if the floor or symptom is unknown, or the cell has no
    /// observations.
    #[must_use]
    pub fn prevalence(&self, floor: &str, symptom: &str) -> Option<f64> {
        let symptom_index = self.symptoms.iter().position(|s| s == symptom)?;
        self.floors.get(floor)?[symptom_index].percentage()
    }
}
