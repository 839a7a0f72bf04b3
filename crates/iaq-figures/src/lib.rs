//! Publication figures for the indoor air quality study.
//!
//! Every figure is drawn from a literal dataset in [`data`] and saved as a
//! PNG under a fixed file name:
//!
//! | Figure                                        | File                                 |
//! |-----------------------------------------------|--------------------------------------|
//! | [`figure::Figure::LatencyAnalysis`]           | `figure_1_latency_analysis.png`      |
//! | [`figure::Figure::SymptomHeatmap`]            | `figure_2_symptom_heatmap.png`       |
//! | [`figure::Figure::RadarPerception`]           | `figure_3_radar_perception.png`      |
//! | [`figure::Figure::SmoteEffect`]               | `figure_4_smote_effect.png`          |
//! | [`figure::Figure::FeatureImportance`]         | `figure_5_feature_importance.png`    |
//! | [`figure::Figure::GovernanceFramework`]       | `figure_6_governance_framework.png`  |
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! use iaq_figures::figure::render_all;
//!
//! for (figure, result) in render_all(Path::new("figures")) {
//!     match result {
//!         Ok(path) => println!("{figure}: {}", path.display()),
//!         Err(e) => eprintln!("{figure}: {e}"),
//!     }
//! }
//! ```

pub mod data;
pub mod figure;
pub mod plot;
