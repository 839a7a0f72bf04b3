use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use iaq_analysis::{
    config::AnalysisConfig,
    correlation::CorrelationMatrix,
    dataset::{ColumnError, Table},
    demographics::DemographicSummary,
    perception::PerceptionSummary,
    sensors::SensorSummary,
    symptoms::SymptomMatrix,
};

use crate::util;

mod table;

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Survey responses CSV file
    #[arg(long, default_value = "New Paper.xlsx - Form Responses 1.csv")]
    pub survey: PathBuf,
    /// Sensor readings CSV file
    #[arg(long, default_value = "ML Data JML.csv")]
    pub sensors: PathBuf,
    /// Column mapping JSON file (see `print-config`); the built-in study
    /// mapping is used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// One of the five independent report tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
enum Routine {
    #[display("Table 1 (socio-demographics)")]
    Demographics,
    #[display("Table 2 (environmental perception)")]
    Perception,
    #[display("Table 3 (symptoms by floor)")]
    SymptomMatrix,
    #[display("Table 4 (correlations)")]
    Correlation,
    #[display("Table 5 (sensors)")]
    Sensors,
}

impl Routine {
    const ALL: [Self; 5] = [
        Self::Demographics,
        Self::Perception,
        Self::SymptomMatrix,
        Self::Correlation,
        Self::Sensors,
    ];

    fn run(
        self,
        survey: &Table,
        sensors: &Table,
        config: &AnalysisConfig,
    ) -> Result<(), ColumnError> {
        match self {
            Self::Demographics => {
                let summary = DemographicSummary::from_table(survey, &config.demographics)?;
                table::print_demographics(&summary);
            }
            Self::Perception => {
                let summary = PerceptionSummary::from_table(survey, &config.perception)?;
                table::print_perception(&summary);
            }
            Self::SymptomMatrix => {
                let matrix = SymptomMatrix::from_table(survey, &config.symptom_matrix)?;
                table::print_symptom_matrix(&matrix);
            }
            Self::Correlation => {
                let matrix = CorrelationMatrix::from_table(survey, &config.correlation)?;
                table::print_correlations(&matrix);
            }
            Self::Sensors => {
                let summary = SensorSummary::from_table(sensors, &config.sensors)?;
                table::print_sensors(&summary);
            }
        }
        Ok(())
    }
}

fn load_table(kind: &str, path: &Path) -> anyhow::Result<Table> {
    Table::from_path(path).with_context(|| format!("Failed to load {kind} dataset"))
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let AnalyzeArg {
        survey,
        sensors,
        config,
    } = arg;

    let config = util::read_config_file(config.as_deref())?;
    // Both datasets must load before any table is printed
    let survey = load_table("survey", survey)?;
    let sensors = load_table("sensor", sensors)?;

    println!("RESEARCH ANALYSIS: PUBLIC ADMIN JOURNAL");
    println!("{}", "=".repeat(64));

    let mut failed = vec![];
    for routine in Routine::ALL {
        if let Err(e) = routine.run(&survey, &sensors, &config) {
            tracing::error!(routine = %routine, error = %e, "analysis routine failed");
            println!("{routine}: skipped ({e})\n");
            failed.push(routine);
        }
    }

    println!("Note: Technical performance metrics (Table 6-8) are derived from the ");
    println!("TinyML model deployment logs and hardware profiling on the MCU.");

    if !failed.is_empty() {
        let names = failed.iter().map(ToString::to_string).collect::<Vec<_>>();
        anyhow::bail!(
            "{} of {} analysis routines failed: {}",
            failed.len(),
            Routine::ALL.len(),
            names.join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const SURVEY: &str = "\
Status,Gender,Working Hours/ Study Hours,Floor,\
\"Environment [Stuffy \"\"bad\"\" air]\",Environment [Room temperature too high],Environment [Noise],\
Symptoms [Fatigue],Symptoms [Headache],Symptoms [Difficulties concentrating],Symptoms [Suffering from stress],\
Condition [Do you have too much work to do?],\
Condition [Do you regard your work as interesting and stimulating?],\
Condition [Do you have any opportunity to influence your working conditions?]
Student,Female,1 - 2 hours,1,1,2,0,Yes,No,Yes,Yes,Yes,No,Yes
Lecturer,Male,2 - 4 hours,2,2,1,2,No,Yes,No,No,No,Yes,No
Staff,Female,> 4,1,0,0,1,Yes,Yes,No,Yes,Yes,Yes,No
";

    const SENSORS: &str = "\
Timestamp,Device,PM2.5,Humidity,CO2,Temperature,TVOC,Label
t0,d1,12.5,40,400,22.5,100,0
t1,d1,35.0,55,1500,27.0,300,1
t2,d1,20.0,50,420,24.0,150,0
";

    fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn load(contents: &str) -> Table {
        Table::from_reader(contents.as_bytes()).unwrap()
    }

    #[test]
    fn test_every_routine_runs_on_study_schema() {
        let survey = load(SURVEY);
        let sensors = load(SENSORS);
        let config = AnalysisConfig::default();
        for routine in Routine::ALL {
            routine
                .run(&survey, &sensors, &config)
                .unwrap_or_else(|e| panic!("{routine}: {e}"));
        }
    }

    #[test]
    fn test_missing_column_fails_only_its_routine() {
        let survey = load(SURVEY);
        let sensors = load(SENSORS);
        let mut config = AnalysisConfig::default();
        config.symptom_matrix.floor_column = "Level".to_owned();

        let failed = Routine::ALL
            .into_iter()
            .filter(|routine| routine.run(&survey, &sensors, &config).is_err())
            .collect::<Vec<_>>();
        assert_eq!(failed, vec![Routine::SymptomMatrix]);
    }

    #[test]
    fn test_run_reports_failed_routine_count() {
        let dir = tempfile::tempdir().unwrap();
        let survey = write_fixture(dir.path(), "survey.csv", SURVEY);
        let sensors = write_fixture(dir.path(), "sensors.csv", "Only,Two\n1,2\n");

        let err = run(&AnalyzeArg {
            survey,
            sensors,
            config: None,
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "1 of 5 analysis routines failed: Table 5 (sensors)"
        );
    }

    #[test]
    fn test_missing_dataset_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let sensors = write_fixture(dir.path(), "sensors.csv", SENSORS);
        let survey = dir.path().join("absent.csv");

        let err = run(&AnalyzeArg {
            survey,
            sensors,
            config: None,
        })
        .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("Failed to load survey dataset"), "{message}");
        assert!(message.contains("absent.csv"), "{message}");
    }

    #[test]
    fn test_run_succeeds_on_complete_datasets() {
        let dir = tempfile::tempdir().unwrap();
        let survey = write_fixture(dir.path(), "survey.csv", SURVEY);
        let sensors = write_fixture(dir.path(), "sensors.csv", SENSORS);
        run(&AnalyzeArg {
            survey,
            sensors,
            config: None,
        })
        .unwrap();
    }
}
