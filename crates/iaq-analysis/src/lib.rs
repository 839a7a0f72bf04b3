//! Survey and sensor analysis routines for the sick building syndrome study.
//!
//! Each routine reads a [`dataset::Table`] through the column mapping in
//! [`config::AnalysisConfig`] and produces one summary structure:
//!
//! | Routine                                          | Output                                      |
//! |--------------------------------------------------|---------------------------------------------|
//! | [`demographics::DemographicSummary::from_table`] | status, gender and duration distributions   |
//! | [`perception::PerceptionSummary::from_table`]    | stressor frequency breakdown                |
//! | [`symptoms::SymptomMatrix::from_table`]          | floor × symptom prevalence                  |
//! | [`correlation::CorrelationMatrix::from_table`]   | condition × symptom Pearson correlations    |
//! | [`sensors::SensorSummary::from_table`]           | min/max/mean per sensor channel             |
//!
//! Routines are independent: a missing column fails only the routine that
//! needs it, with a [`dataset::ColumnError`]. Rendering the summaries is
//! left to the caller.
//!
//! # Examples
//!
//! ```
//! use iaq_analysis::{
//!     config::SymptomMatrixConfig, dataset::Table, symptoms::SymptomMatrix,
//! };
//!
//! let csv = "Floor,Symptoms [Fatigue]\nF1,1\nF1,0\nF2,1\nF2,1\n";
//! let table = Table::from_reader(csv.as_bytes()).unwrap();
//! let config = SymptomMatrixConfig {
//!     floor_column: "Floor".to_owned(),
//!     symptoms: vec!["Symptoms [Fatigue]".to_owned()],
//! };
//! let matrix = SymptomMatrix::from_table(&table, &config).unwrap();
//! assert_eq!(matrix.prevalence("F1", "Symptoms [Fatigue]"), Some(50.0));
//! assert_eq!(matrix.prevalence("F2", "Symptoms [Fatigue]"), Some(100.0));
//! ```

pub mod config;
pub mod correlation;
pub mod dataset;
pub mod demographics;
pub mod perception;
pub mod response;
pub mod sensors;
pub mod symptoms;
