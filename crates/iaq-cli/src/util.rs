use std::{
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use iaq_analysis::config::AnalysisConfig;

/// Destination of a JSON document: a file when a path is given, stdout
/// otherwise.
#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match output_path {
            Some(path) => Output::create(path)?,
            None => Output::Stdout {
                writer: io::stdout().lock(),
            },
        };
        output.write_json(value)?;
        if let Output::File { path, .. } = &output {
            tracing::info!(path = %path.display(), "JSON written");
        }
        Ok(())
    }

    fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path: path.to_owned(),
        })
    }

    fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_owned(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(self)
            .and_then(|()| self.flush())
            .with_context(|| format!("Failed to finish writing {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}

/// Loads the column mapping from `path`, or the built-in study mapping
/// when no path is given.
pub fn read_config_file(path: Option<&Path>) -> anyhow::Result<AnalysisConfig> {
    match path {
        Some(path) => {
            let config = read_json_file("analysis config", path)?;
            tracing::info!(path = %path.display(), "loaded column mapping");
            Ok(config)
        }
        None => Ok(AnalysisConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_saved_config_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = AnalysisConfig::default();

        Output::save_json(&config, Some(&path)).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("}\n"));
        assert_eq!(read_config_file(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_partial_config_keeps_other_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "symptom_matrix": { "floor_column": "Level", "symptoms": ["Headache"] } }"#,
        )
        .unwrap();

        let config = read_config_file(Some(&path)).unwrap();
        let default = AnalysisConfig::default();
        assert_eq!(config.symptom_matrix.floor_column, "Level");
        assert_eq!(config.symptom_matrix.symptoms, vec!["Headache".to_owned()]);
        assert_eq!(config.demographics, default.demographics);
        assert_eq!(config.sensors, default.sensors);
    }

    #[test]
    fn test_missing_config_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = read_config_file(Some(&path)).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("analysis config"), "{message}");
        assert!(message.contains("absent.json"), "{message}");
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = read_config_file(Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse analysis config JSON file"));
    }

    #[test]
    fn test_no_path_uses_builtin_mapping() {
        assert_eq!(read_config_file(None).unwrap(), AnalysisConfig::default());
    }
}
