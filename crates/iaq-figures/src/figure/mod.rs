//! The publication figures and their output files

use std::path::{Path, PathBuf};

use crate::plot::PlotError;

mod bars;
mod class_balance;
mod feature_importance;
mod governance;
mod heatmap;
mod latency;
mod radar;

/// One of the six publication figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Figure {
    #[display("Figure 1 (latency analysis)")]
    LatencyAnalysis,
    #[display("Figure 2 (symptom heatmap)")]
    SymptomHeatmap,
    #[display("Figure 3 (perception radar)")]
    RadarPerception,
    #[display("Figure 4 (SMOTE effect)")]
    SmoteEffect,
    #[display("Figure 5 (feature importance)")]
    FeatureImportance,
    #[display("Figure 6 (governance framework)")]
    GovernanceFramework,
}

impl Figure {
    /// All figures in publication order.
    pub const ALL: [Self; 6] = [
        Self::LatencyAnalysis,
        Self::SymptomHeatmap,
        Self::RadarPerception,
        Self::SmoteEffect,
        Self::FeatureImportance,
        Self::GovernanceFramework,
    ];

    /// Name of the PNG file the figure is saved to.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::LatencyAnalysis => "figure_1_latency_analysis.png",
            Self::SymptomHeatmap => "figure_2_symptom_heatmap.png",
            Self::RadarPerception => "figure_3_radar_perception.png",
            Self::SmoteEffect => "figure_4_smote_effect.png",
            Self::FeatureImportance => "figure_5_feature_importance.png",
            Self::GovernanceFramework => "figure_6_governance_framework.png",
        }
    }

    /// Renders the figure into `output_dir`, overwriting any previous file,
    /// and returns the path written.
    pub fn render(self, output_dir: &Path) -> Result<PathBuf, PlotError> {
        if !output_dir.is_dir() {
            return Err(PlotError::MissingOutputDir {
                path: output_dir.to_owned(),
            });
        }

        let path = output_dir.join(self.file_name());
        match self {
            Self::LatencyAnalysis => latency::render(&path),
            Self::SymptomHeatmap => heatmap::render(&path),
            Self::RadarPerception => radar::render(&path),
            Self::SmoteEffect => class_balance::render(&path),
            Self::FeatureImportance => feature_importance::render(&path),
            Self::GovernanceFramework => governance::render(&path),
        }?;
        tracing::info!(figure = %self, path = %path.display(), "figure saved");
        Ok(path)
    }
}

/// Renders every figure, independently of the others.
///
/// A figure that fails to render does not stop the rest; its error is
/// returned in its slot.
pub fn render_all(output_dir: &Path) -> Vec<(Figure, Result<PathBuf, PlotError>)> {
    Figure::ALL
        .into_iter()
        .map(|figure| (figure, figure.render(output_dir)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_file_names_are_fixed_and_unique() {
        let names = Figure::ALL.map(Figure::file_name);
        assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
        for (number, name) in (1..).zip(names) {
            assert!(name.starts_with(&format!("figure_{number}_")), "{name}");
            assert!(
                Path::new(name)
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
            );
        }
    }

    #[test]
    fn test_missing_output_dir_fails_every_figure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");
        let results = render_all(&missing);
        assert_eq!(results.len(), Figure::ALL.len());
        for (figure, result) in results {
            assert!(
                matches!(result, Err(PlotError::MissingOutputDir { ref path }) if *path == missing),
                "{figure}"
            );
        }
        assert!(!missing.exists());
    }

    #[test]
    #[ignore = "requires system fonts for text rendering"]
    fn test_render_all_writes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        for (figure, result) in render_all(dir.path()) {
            let path = result.unwrap_or_else(|e| panic!("{figure}: {e}"));
            assert_eq!(path, dir.path().join(figure.file_name()));
            assert!(path.metadata().unwrap().len() > 0);
        }
    }
}
