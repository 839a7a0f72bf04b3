use iaq_analysis::{
    correlation::{ConditionSymptomCorrelation, CorrelationMatrix},
    demographics::DemographicSummary,
    perception::PerceptionSummary,
    sensors::{ChannelSummary, ColumnSource, SensorSummary},
    symptoms::SymptomMatrix,
};
use iaq_stats::{correlation::Correlation, distribution::Distribution};

/// Correlation rows show this many characters of each label.
const CORRELATION_LABEL_WIDTH: usize = 15;

pub(super) fn print_demographics(summary: &DemographicSummary) {
    println!("--- Table 1: Socio-Demographics Analysis ---");
    print_distribution("Status", &summary.status);
    print_distribution("Gender", &summary.gender);
    print_distribution("Duration", &summary.duration);

    if !summary.unmapped_durations.is_empty() {
        let answers = summary
            .unmapped_durations
            .iter()
            .map(|(raw, count)| format!("{raw:?} ({count})"))
            .collect::<Vec<_>>();
        println!(
            "  Excluded {} duration answers without a bin: {}",
            summary.unmapped_duration_count(),
            answers.join(", ")
        );
    }
    println!();
}

fn print_distribution(title: &str, distribution: &Distribution<String>) {
    println!();
    println!("  {title:<30} {:>10}", "Percentage");
    println!("  {}", "-".repeat(41));
    if distribution.is_empty() {
        println!("  (no responses)");
        return;
    }
    for entry in &distribution.entries {
        println!("  {:<30} {:>10.1}", entry.category, entry.percentage);
    }
}

pub(super) fn print_perception(summary: &PerceptionSummary) {
    println!("--- Table 2: Environmental Perception ---");
    println!();
    println!(
        "  {:<12} {:>18} {:>14} {:>18} {:>6}",
        "Stressor", "Often/Always (%)", "Sometimes (%)", "Rarely/Never (%)", "N"
    );
    println!("  {}", "-".repeat(72));
    for stressor in &summary.stressors {
        println!(
            "  {:<12} {:>18} {:>14} {:>18} {:>6}",
            stressor.label,
            percent_cell(stressor.often_always()),
            percent_cell(stressor.sometimes()),
            percent_cell(stressor.rarely_never()),
            stressor.responses(),
        );
    }
    println!();
}

pub(super) fn print_symptom_matrix(matrix: &SymptomMatrix) {
    println!("--- Table 3: Symptoms Matrix (%) by Floor ---");
    println!();
    let labels = matrix
        .symptoms
        .iter()
        .map(|s| bracketed(s))
        .collect::<Vec<_>>();
    let widths = labels.iter().map(|l| l.len().max(8)).collect::<Vec<_>>();

    let mut header = format!("  {:<8}", "Floor");
    for (label, width) in labels.iter().zip(&widths) {
        header.push_str(&format!(" {label:>width$}"));
    }
    println!("{header}");
    println!("  {}", "-".repeat(header.len() - 2));

    if matrix.floors.is_empty() {
        println!("  (no floor recorded)");
    }
    for (floor, counts) in &matrix.floors {
        let mut row = format!("  {floor:<8}");
        for (count, width) in counts.iter().zip(&widths) {
            row.push_str(&format!(" {:>width$}", percent_cell(count.percentage())));
        }
        println!("{row}");
    }
    println!();
}

pub(super) fn print_correlations(matrix: &CorrelationMatrix) {
    println!("--- Table 4: Correlation Coefficient (r) Matrix ---");
    for pair in &matrix.pairs {
        println!("{}", correlation_line(pair));
    }
    println!("  (** p < 0.01, * p < 0.05)");
    println!();
}

fn correlation_line(pair: &ConditionSymptomCorrelation) -> String {
    let condition = truncate(bracketed(&pair.condition), CORRELATION_LABEL_WIDTH);
    let symptom = truncate(bracketed(&pair.symptom), CORRELATION_LABEL_WIDTH);
    match &pair.correlation {
        Correlation::Defined(c) => format!(
            "{condition} x {symptom}: r={:.2}{} (p={:.4}, n={})",
            c.r,
            c.significance().marker(),
            c.p_value,
            c.n
        ),
        Correlation::Undefined(reason) => {
            format!("{condition} x {symptom}: r=N/A ({reason})")
        }
    }
}

pub(super) fn print_sensors(summary: &SensorSummary) {
    println!("--- Table 5: Sensor Analysis (Min, Max, Mean) ---");
    println!();
    println!(
        "  {:<16} {:>10} {:>10} {:>10} {:>10} {:>10} {:>6}",
        "Metric", "Min", "Max", "Mean", "Median", "Std Dev", "N"
    );
    println!("  {}", "-".repeat(78));
    for channel in &summary.channels {
        println!("{}", sensor_row(channel));
    }

    for channel in &summary.channels {
        if let ColumnSource::Positional { .. } = channel.source {
            println!(
                "  note: {} read from column {:?} {}",
                channel.label, channel.column, channel.source
            );
        }
        if channel.skipped > 0 {
            println!(
                "  note: {} skipped {} non-numeric readings",
                channel.label, channel.skipped
            );
        }
    }
    println!();
}

fn sensor_row(channel: &ChannelSummary) -> String {
    let Some(stats) = &channel.stats else {
        let na = "N/A";
        return format!(
            "  {:<16} {na:>10} {na:>10} {na:>10} {na:>10} {na:>10} {:>6}",
            channel.label, 0
        );
    };
    format!(
        "  {:<16} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>6}",
        channel.label,
        stats.min,
        stats.max,
        stats.mean,
        stats.median,
        stats.std_dev,
        stats.count
    )
}

fn percent_cell(value: Option<f64>) -> String {
    value.map_or("N/A".to_owned(), |v| format!("{v:.1}"))
}

/// The part of a survey column name between its brackets, or the whole
/// name when it has none.
fn bracketed(name: &str) -> &str {
    name.split_once('[')
        .and_then(|(_, rest)| rest.rsplit_once(']'))
        .map_or(name, |(inner, _)| inner)
}

fn truncate(label: &str, width: usize) -> String {
    let truncated = label.chars().take(width).collect::<String>();
    truncated.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use iaq_stats::{
        correlation::{PearsonCorrelation, UndefinedReason},
        descriptive::DescriptiveStats,
    };

    use super::*;

    fn pair(correlation: Correlation) -> ConditionSymptomCorrelation {
        ConditionSymptomCorrelation {
            condition: "Condition [Do you have too much work to do?]".to_owned(),
            symptom: "Symptoms [Suffering from stress]".to_owned(),
            correlation,
        }
    }

    #[test]
    fn test_bracketed_extracts_question() {
        assert_eq!(bracketed("Symptoms [Fatigue]"), "Fatigue");
        assert_eq!(
            bracketed("Environment [Stuffy \"bad\" air]"),
            "Stuffy \"bad\" air"
        );
        assert_eq!(bracketed("Floor"), "Floor");
        assert_eq!(bracketed("Broken [label"), "Broken [label");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("Difficulties concentrating", 15), "Difficulties co");
        assert_eq!(truncate("Fatigue", 15), "Fatigue");
        assert_eq!(truncate("Suffering from stress", 15), "Suffering from");
        assert_eq!(truncate("Überstunden-Last", 3), "Übe");
    }

    #[test]
    fn test_correlation_line_with_strong_significance() {
        let line = correlation_line(&pair(Correlation::Defined(PearsonCorrelation {
            r: 0.939_393,
            p_value: 5.48e-5,
            n: 10,
        })));
        assert_eq!(
            line,
            "Do you have too x Suffering from: r=0.94** (p=0.0001, n=10)"
        );
    }

    #[test]
    fn test_correlation_line_without_significance() {
        let line = correlation_line(&pair(Correlation::Defined(PearsonCorrelation {
            r: -0.1,
            p_value: 0.5,
            n: 12,
        })));
        assert!(line.ends_with(": r=-0.10 (p=0.5000, n=12)"), "{line}");
    }

    #[test]
    fn test_correlation_line_when_undefined() {
        let line = correlation_line(&pair(Correlation::Undefined(
            UndefinedReason::ZeroVariance,
        )));
        assert_eq!(
            line,
            "Do you have too x Suffering from: r=N/A (zero variance)"
        );
    }

    fn channel(stats: Option<DescriptiveStats>) -> ChannelSummary {
        ChannelSummary {
            label: "CO2 (ppm)".to_owned(),
            column: "CO2".to_owned(),
            source: ColumnSource::Named,
            stats,
            skipped: 0,
        }
    }

    #[test]
    fn test_sensor_row_shows_spread() {
        let stats = DescriptiveStats::new([400.0, 420.0, 1500.0]);
        let row = sensor_row(&channel(stats));
        let cells = row.split_whitespace().collect::<Vec<_>>();
        assert_eq!(
            cells,
            vec!["CO2", "(ppm)", "400.00", "1500.00", "773.33", "420.00", "513.90", "3"]
        );
    }

    #[test]
    fn test_sensor_row_without_readings() {
        let row = sensor_row(&channel(None));
        let cells = row.split_whitespace().collect::<Vec<_>>();
        assert_eq!(cells, vec!["CO2", "(ppm)", "N/A", "N/A", "N/A", "N/A", "N/A", "0"]);
    }

    #[test]
    fn test_percent_cell_marks_missing() {
        assert_eq!(percent_cell(None), "N/A");
        assert_eq!(percent_cell(Some(66.666)), "66.7");
        assert_eq!(percent_cell(Some(0.0)), "0.0");
    }
}
