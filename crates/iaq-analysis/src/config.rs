//! Column mappings and label tables for the analysis routines
//!
//! Every survey column name, category remapping and sensor channel lives
//! here rather than inside the routines. [`AnalysisConfig::default`]
//! reproduces the schema of the study's survey export; a JSON file with
//! the same shape can replace any section of it.

use serde::{Deserialize, Serialize};

/// Complete configuration of the statistics job.
///
/// Sections missing from a deserialized document fall back to their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub demographics: DemographicsConfig,
    pub perception: PerceptionConfig,
    pub symptom_matrix: SymptomMatrixConfig,
    pub correlation: CorrelationConfig,
    pub sensors: SensorConfig,
}

/// A display label paired with the column it is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledColumn {
    pub label: String,
    pub column: String,
}

impl LabeledColumn {
    pub fn new(label: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            column: column.into(),
        }
    }
}

/// Table 1: socio-demographic profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemographicsConfig {
    pub status_column: String,
    pub gender_column: String,
    pub duration_column: String,
    pub duration_bins: DurationBins,
}

impl Default for DemographicsConfig {
    fn default() -> Self {
        Self {
            status_column: "Status".to_owned(),
            gender_column: "Gender".to_owned(),
            duration_column: "Working Hours/ Study Hours".to_owned(),
            duration_bins: DurationBins::default(),
        }
    }
}

/// One raw survey option and the canonical bin it is counted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationBin {
    pub raw: String,
    pub bin: String,
}

/// Remapping of raw duration answers to canonical exposure bins.
///
/// Raw answers are matched exactly after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationBins(pub Vec<DurationBin>);

impl Default for DurationBins {
    fn default() -> Self {
        Self(
            [
                ("1 - 2 hours", "< 2 Hours"),
                ("2 - 4 hours", "2 - 4 Hours"),
                ("> 4", "> 4 Hours"),
            ]
            .into_iter()
            .map(|(raw, bin)| DurationBin {
                raw: raw.to_owned(),
                bin: bin.to_owned(),
            })
            .collect(),
        )
    }
}

impl DurationBins {
    /// Returns the canonical bin of a raw answer, if it is mapped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use iaq_analysis::config::DurationBins;
    /// let bins = DurationBins::default();
    /// assert_eq!(bins.bin_for("2 - 4 hours"), Some("2 - 4 Hours"));
    /// assert_eq!(bins.bin_for(" > 4 "), Some("> 4 Hours"));
    /// assert_eq!(bins.bin_for("less than 1 hour"), None);
    /// ```
    #[must_use]
    pub fn bin_for(&self, raw: &str) -> Option<&str> {
        let raw = raw.trim();
        self.0
            .iter()
            .find(|b| b.raw == raw)
            .map(|b| b.bin.as_str())
    }

    /// Canonical bins in configuration order, without duplicates.
    #[must_use]
    pub fn canonical_bins(&self) -> Vec<&str> {
        let mut bins = Vec::<&str>::new();
        for b in &self.0 {
            if !bins.contains(&b.bin.as_str()) {
                bins.push(&b.bin);
            }
        }
        bins
    }
}

/// Table 2: environmental perception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerceptionConfig {
    pub stressors: Vec<LabeledColumn>,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            stressors: vec![
                LabeledColumn::new("Stuffy Air", "Environment [Stuffy \"bad\" air]"),
                LabeledColumn::new("High Temp", "Environment [Room temperature too high]"),
                LabeledColumn::new("Noise", "Environment [Noise]"),
            ],
        }
    }
}

/// Table 3: symptom prevalence by floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomMatrixConfig {
    pub floor_column: String,
    pub symptoms: Vec<String>,
}

impl Default for SymptomMatrixConfig {
    fn default() -> Self {
        Self {
            floor_column: "Floor".to_owned(),
            symptoms: vec![
                "Symptoms [Fatigue]".to_owned(),
                "Symptoms [Headache]".to_owned(),
                "Symptoms [Difficulties concentrating]".to_owned(),
            ],
        }
    }
}

/// Table 4: working conditions against symptoms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrelationConfig {
    pub conditions: Vec<String>,
    pub symptoms: Vec<String>,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            conditions: vec![
                "Condition [Do you have too much work to do?]".to_owned(),
                "Condition [Do you regard your work as interesting and stimulating?]".to_owned(),
                "Condition [Do you have any opportunity to influence your working conditions?]"
                    .to_owned(),
            ],
            symptoms: vec![
                "Symptoms [Suffering from stress]".to_owned(),
                "Symptoms [Fatigue]".to_owned(),
                "Symptoms [Difficulties concentrating]".to_owned(),
            ],
        }
    }
}

/// Table 5: sensor thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub channels: Vec<SensorChannel>,
}

/// Location of one sensor channel in the sensor dataset.
///
/// The column is looked up by name first. `offset_from_end` (negative,
/// `-1` is the last column) is used only when the name is absent, which
/// keeps exports without a usable header readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorChannel {
    pub label: String,
    pub column: Option<String>,
    pub offset_from_end: isize,
}

impl SensorChannel {
    pub fn new(label: impl Into<String>, column: impl Into<String>, offset_from_end: isize) -> Self {
        Self {
            label: label.into(),
            column: Some(column.into()),
            offset_from_end,
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            channels: vec![
                SensorChannel::new("CO2 (ppm)", "CO2", -4),
                SensorChannel::new("PM2.5 (ug/m3)", "PM2.5", -6),
                SensorChannel::new("TVOC (ppb)", "TVOC", -2),
            ],
        }
    }
}
