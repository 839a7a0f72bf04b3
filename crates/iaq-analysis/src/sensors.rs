//! Indoor air quality sensor thresholds (Table 5)

use std::fmt;

use iaq_stats::descriptive::DescriptiveStats;

use crate::{
    config::{SensorChannel, SensorConfig},
    dataset::{Column, ColumnError, Table},
};

/// How a sensor channel's column was located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSource {
    /// Found by header name.
    Named,
    /// Header name absent; located by offset from the last column.
    Positional { offset: isize },
}

impl fmt::Display for ColumnSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named => f.write_str("by name"),
            Self::Positional { offset } => write!(f, "at offset {offset}"),
        }
    }
}

/// Resolves a channel to a column: by name when present, otherwise by its
/// offset from the end of the header.
pub fn resolve_channel<'a>(
    table: &'a Table,
    channel: &SensorChannel,
) -> Result<(Column<'a>, ColumnSource), ColumnError> {
    if let Some(name) = &channel.column
        && let Ok(column) = table.column(name)
    {
        return Ok((column, ColumnSource::Named));
    }

    match (table.column_from_end(channel.offset_from_end), &channel.column) {
        (Ok(column), name) => {
            tracing::warn!(
                channel = channel.label.as_str(),
                expected = name.as_deref(),
                used = column.name(),
                offset = channel.offset_from_end,
                "sensor column located by position"
            );
            Ok((
                column,
                ColumnSource::Positional {
                    offset: channel.offset_from_end,
                },
            ))
        }
        (Err(_), Some(name)) => Err(ColumnError::Unresolved {
            name: name.clone(),
            offset: channel.offset_from_end,
            width: table.num_columns(),
        }),
        (Err(err), None) => Err(err),
    }
}

/// Min/max/mean of one sensor channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSummary {
    pub label: String,
    /// Header of the column the values were read from.
    pub column: String,
    pub source: ColumnSource,
    /// `None` when the column holds no numeric value.
    pub stats: Option<DescriptiveStats>,
    /// Non-missing cells that were not finite numbers.
    pub skipped: usize,
}

impl ChannelSummary {
    #[must_use]
    pub fn from_column(label: &str, column: Column<'_>, source: ColumnSource) -> Self {
        let mut values = vec![];
        let mut skipped = 0;
        for value in column.cells().flatten() {
            match value.parse::<f64>() {
                Ok(v) if v.is_finite() => values.push(v),
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::warn!(
                channel = label,
                column = column.name(),
                skipped,
                "non-numeric sensor readings were excluded"
            );
        }

        Self {
            label: label.to_owned(),
            column: column.name().to_owned(),
            source,
            stats: DescriptiveStats::new(values),
            skipped,
        }
    }
}

/// Summary of all configured sensor channels.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorSummary {
    pub channels: Vec<ChannelSummary>,
}

impl SensorSummary {
    pub fn from_table(table: &Table, config: &SensorConfig) -> Result<Self, ColumnError> {
        let resolved = config
            .channels
            .iter()
            .map(|channel| Ok((channel, resolve_channel(table, channel)?)))
            .collect::<Result<Vec<_>, ColumnError>>()?;

        let channels = resolved
            .into_iter()
            .map(|(channel, (column, source))| {
                ChannelSummary::from_column(&channel.label, column, source)
            })
            .collect();
        Ok(Self { channels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Layout of the sensor export the default offsets were taken from:
    /// `PM2.5` sits six columns from the end, `CO2` four and `TVOC` two.
    const FIXTURE_HEADER: &str = "Timestamp,Device,PM2.5,Humidity,CO2,Temperature,TVOC,Label";

    fn fixture(header: &str, rows: &[&str]) -> Table {
        let csv = format!("{header}\n{}\n", rows.join("\n"));
        Table::from_reader(csv.as_bytes()).unwrap()
    }

    fn channel<'a>(summary: &'a SensorSummary, label: &str) -> &'a ChannelSummary {
        summary.channels.iter().find(|c| c.label == label).unwrap()
    }

    #[test]
    fn test_named_lookup() {
        let table = fixture(
            FIXTURE_HEADER,
            &[
                "t0,d,12.0,40,400,21,100,0",
                "t1,d,15.5,41,420,22,140,0",
                "t2,d,30.25,42,1500,23,90,1",
            ],
        );
        let summary = SensorSummary::from_table(&table, &SensorConfig::default()).unwrap();

        let co2 = channel(&summary, "CO2 (ppm)");
        assert_eq!(co2.source, ColumnSource::Named);
        let stats = co2.stats.as_ref().unwrap();
        assert_eq!(stats.min, 400.0);
        assert_eq!(stats.max, 1500.0);
        assert!((stats.mean - 773.333_333).abs() < 1e-6);

        let pm = channel(&summary, "PM2.5 (ug/m3)").stats.as_ref().unwrap();
        assert_eq!((pm.min, pm.max), (12.0, 30.25));

        let tvoc = channel(&summary, "TVOC (ppb)").stats.as_ref().unwrap();
        assert_eq!((tvoc.min, tvoc.max), (90.0, 140.0));
    }

    #[test]
    fn test_default_offsets_match_fixture_schema() {
        let table = fixture(FIXTURE_HEADER, &["t0,d,12,40,400,21,100,0"]);
        let expected = [("CO2 (ppm)", "CO2"), ("PM2.5 (ug/m3)", "PM2.5"), ("TVOC (ppb)", "TVOC")];
        for (label, column) in expected {
            let channel = SensorConfig::default()
                .channels
                .into_iter()
                .find(|c| c.label == label)
                .unwrap();
            let by_offset = table.column_from_end(channel.offset_from_end).unwrap();
            assert_eq!(by_offset.name(), column, "offset of {label}");
            assert_eq!(channel.column.as_deref(), Some(column));
        }
    }

    #[test]
    fn test_positional_fallback_when_names_are_absent() {
        // Same layout as the fixture, but the export lost its sensor headers
        let header = "Timestamp,Device,c2,c3,c4,c5,c6,c7";
        let table = fixture(
            header,
            &["t0,d,12.0,40,400,21,100,0", "t1,d,15.5,41,1500,22,140,0"],
        );
        let summary = SensorSummary::from_table(&table, &SensorConfig::default()).unwrap();

        let co2 = channel(&summary, "CO2 (ppm)");
        assert_eq!(co2.source, ColumnSource::Positional { offset: -4 });
        assert_eq!(co2.column, "c4");
        let stats = co2.stats.as_ref().unwrap();
        assert_eq!((stats.min, stats.max), (400.0, 1500.0));

        assert_eq!(channel(&summary, "PM2.5 (ug/m3)").column, "c2");
        assert_eq!(channel(&summary, "TVOC (ppb)").column, "c6");
    }

    #[test]
    fn test_unresolved_channel() {
        let table = fixture("a,b,c", &["1,2,3"]);
        let err = SensorSummary::from_table(&table, &SensorConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ColumnError::Unresolved {
                name: "CO2".to_owned(),
                offset: -4,
                width: 3
            }
        );
    }

    #[test]
    fn test_unnamed_channel_uses_offset_only() {
        let table = fixture("a,b,c", &["1,2,3", "4,5,6"]);
        let config = SensorConfig {
            channels: vec![SensorChannel {
                label: "Middle".to_owned(),
                column: None,
                offset_from_end: -2,
            }],
        };
        let summary = SensorSummary::from_table(&table, &config).unwrap();
        assert_eq!(summary.channels[0].column, "b");
        let stats = summary.channels[0].stats.as_ref().unwrap();
        assert_eq!((stats.min, stats.max, stats.mean), (2.0, 5.0, 3.5));

        let config = SensorConfig {
            channels: vec![SensorChannel {
                label: "Gone".to_owned(),
                column: None,
                offset_from_end: -9,
            }],
        };
        let err = SensorSummary::from_table(&table, &config).unwrap_err();
        assert_eq!(err, ColumnError::OffsetOutOfRange { offset: -9, width: 3 });
    }

    #[test]
    fn test_non_numeric_and_missing_readings() {
        let table = fixture("CO2", &["400", "", "err", "NaN", "420", "1500"]);
        let config = SensorConfig {
            channels: vec![SensorChannel::new("CO2 (ppm)", "CO2", -1)],
        };
        let summary = SensorSummary::from_table(&table, &config).unwrap();
        let co2 = &summary.channels[0];
        assert_eq!(co2.skipped, 1);
        let stats = co2.stats.as_ref().unwrap();
        assert_eq!(stats.count, 3);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    }

    #[test]
    fn test_single_reading() {
        let table = fixture("CO2", &["612.5"]);
        let config = SensorConfig {
            channels: vec![SensorChannel::new("CO2 (ppm)", "CO2", -1)],
        };
        let summary = SensorSummary::from_table(&table, &config).unwrap();
        let stats = summary.channels[0].stats.as_ref().unwrap();
        assert_eq!(stats.min, 612.5);
        assert_eq!(stats.mean, 612.5);
        assert_eq!(stats.max, 612.5);
    }

    #[test]
    fn test_no_readings_is_undefined() {
        let table = fixture("CO2", &["NA", "x"]);
        let config = SensorConfig {
            channels: vec![SensorChannel::new("CO2 (ppm)", "CO2", -1)],
        };
        let summary = SensorSummary::from_table(&table, &config).unwrap();
        assert_eq!(summary.channels[0].stats, None);
    }
}
