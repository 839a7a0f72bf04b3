//! Literal datasets behind the publication figures
//!
//! None of these are computed from the survey; they are the representative
//! values quoted in the paper.

/// One named series of values, aligned with the categories of its chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub values: &'static [f64],
}

/// Bars grouped by category, one bar per series in each group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupedBars {
    pub title: &'static str,
    pub y_label: &'static str,
    pub groups: &'static [&'static str],
    pub series: &'static [Series],
}

impl GroupedBars {
    /// Largest value over all series, `0.0` if there is none.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// Figure 1: response latency per stage, in seconds.
pub const LATENCY: GroupedBars = GroupedBars {
    title: "Figure 1: Administrative Latency Comparison",
    y_label: "Response Latency (Seconds - Log Scale)",
    groups: &[
        "Sensor Trigger",
        "Gateway",
        "Cloud Logic",
        "Admin Notification",
        "HVAC Action",
    ],
    series: &[
        Series {
            label: "Traditional Cloud (Minutes)",
            values: &[1.0, 5.0, 20.0, 60.0, 10.0],
        },
        Series {
            label: "tinyML Edge (Instant)",
            values: &[1.0, 0.01, 0.05, 0.0, 1.0],
        },
    ],
};

/// Figure 4: instances per class before and after oversampling.
pub const CLASS_BALANCE: GroupedBars = GroupedBars {
    title: "Figure 4: Data Augmentation for Minority Risk Classes",
    y_label: "Number of Instances",
    groups: &["Healthy (0)", "Health Risk (1)"],
    series: &[
        Series {
            label: "Pre-SMOTE (Imbalanced)",
            values: &[150.0, 20.0],
        },
        Series {
            label: "Post-SMOTE (Optimized)",
            values: &[150.0, 150.0],
        },
    ],
};

/// Row-major grid of annotated cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heatmap {
    pub title: &'static str,
    pub rows: &'static [&'static str],
    pub columns: &'static [&'static str],
    pub values: &'static [&'static [f64]],
}

impl Heatmap {
    /// Smallest and largest cell value.
    #[must_use]
    pub fn value_range(&self) -> (f64, f64) {
        self.values.iter().flat_map(|row| row.iter().copied()).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), v| (lo.min(v), hi.max(v)),
        )
    }
}

/// Figure 2: symptom prevalence by floor, in percent.
pub const SYMPTOM_PREVALENCE: Heatmap = Heatmap {
    title: "Figure 2: Prevalence of SBS Symptoms by Floor Level (%)",
    rows: &["Ground", "1st", "2nd", "3rd"],
    columns: &["Fatigue", "Headache", "Concentration", "Irritation"],
    values: &[
        &[52.0, 18.0, 31.0, 15.0],
        &[48.0, 22.0, 35.0, 18.0],
        &[44.0, 19.0, 28.0, 14.0],
        &[56.0, 25.0, 40.0, 21.0],
    ],
};

/// Scores on a shared `0.0..=1.0` scale, one axis per label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radar {
    pub title: &'static str,
    pub axes: &'static [&'static str],
    pub series: &'static [Series],
}

/// Figure 3: normalized concern scores (1 is high concern).
pub const PERCEPTION: Radar = Radar {
    title: "Figure 3: Objective vs. Subjective IAQ Stressors",
    axes: &["CO2 Level", "Temp Control", "Noise", "Odour", "Dust"],
    series: &[
        Series {
            label: "Subjective Perception",
            values: &[0.8, 0.7, 0.9, 0.4, 0.6],
        },
        Series {
            label: "Objective Sensor Data",
            values: &[0.6, 0.4, 0.7, 0.3, 0.5],
        },
    ],
};

/// Labeled weights drawn as horizontal bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranking {
    pub title: &'static str,
    pub x_label: &'static str,
    pub items: &'static [(&'static str, f64)],
}

impl Ranking {
    /// Items ordered by weight, smallest first. Ties keep their order.
    #[must_use]
    pub fn sorted_ascending(&self) -> Vec<(&'static str, f64)> {
        let mut items = self.items.to_vec();
        items.sort_by(|a, b| a.1.total_cmp(&b.1));
        items
    }
}

/// Figure 5: logistic regression weights per predictor.
pub const FEATURE_IMPORTANCE: Ranking = Ranking {
    title: "Figure 5: Environmental Predictors of Health Risk (Logistic Regression Weights)",
    x_label: "Administrative Impact Score (Weight)",
    items: &[
        ("CO2", 0.35),
        ("Temp", 0.22),
        ("Humidity", 0.15),
        ("Work Stress", 0.12),
        ("Noise", 0.08),
        ("TVOC", 0.08),
    ],
};

/// Steps of a left-to-right flow; `\n` separates lines inside a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flow {
    pub title: &'static str,
    pub steps: &'static [&'static str],
}

/// Figure 6: edge-based policy flow.
pub const GOVERNANCE: Flow = Flow {
    title: "Figure 6: The Resilient Governance Framework (Edge-Based Policy Flow)",
    steps: &[
        "Socio-Technical Inputs\n(Sensors + Stress Data)",
        "tinyML Edge Engine\n(Embedded Logistic Regression)",
        "Risk Assessment\n(High Recall Prediction)",
        "Resilient Policy Action\n(Autonomous HVAC/Alerts)",
    ],
};
