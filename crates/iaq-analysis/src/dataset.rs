//! Tabular datasets loaded from delimited text files
//!
//! A [`Table`] keeps every cell as text; interpretation happens in the
//! analysis routines through [`Column::cells`], which already maps
//! conventional null tokens to `None`.

use std::{
    io,
    path::{Path, PathBuf},
};

/// Cell contents treated as missing values (after trimming whitespace).
pub const NULL_TOKENS: [&str; 6] = ["NA", "N/A", "NaN", "nan", "null", "None"];

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("failed to read dataset {}: {source}", path.display())]
    Read { path: PathBuf, source: csv::Error },
    #[display("dataset {} has no header row", path.display())]
    NoHeader { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ColumnError {
    #[display("missing column '{name}'")]
    Missing { name: String },
    #[display("column offset {offset} is out of range for a table with {width} columns")]
    OffsetOutOfRange { offset: isize, width: usize },
    #[display(
        "missing column '{name}' and fallback offset {offset} is out of range for a table with {width} columns"
    )]
    Unresolved {
        name: String,
        offset: isize,
        width: usize,
    },
}

/// An in-memory table with a header row.
///
/// Rows are padded (or truncated) to the header width, so positional
/// access relative to the last column is consistent across rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Loads a comma-separated file with a header row.
    pub fn from_path<P>(path: P) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| LoadError::Read {
            path: path.to_owned(),
            source: e.into(),
        })?;
        let table = Self::from_reader(io::BufReader::new(file)).map_err(|source| {
            LoadError::Read {
                path: path.to_owned(),
                source,
            }
        })?;
        if table.headers.is_empty() {
            return Err(LoadError::NoHeader {
                path: path.to_owned(),
            });
        }
        tracing::info!(
            rows = table.num_rows(),
            columns = table.num_columns(),
            "loaded dataset {}",
            path.display()
        );
        Ok(table)
    }

    /// Parses comma-separated text with a header row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use iaq_analysis::dataset::Table;
    /// let csv = "Status,Gender\nStudent,Female\nStaff,\n";
    /// let table = Table::from_reader(csv.as_bytes()).unwrap();
    /// assert_eq!(table.num_rows(), 2);
    /// let gender = table.column("Gender").unwrap();
    /// assert_eq!(gender.cells().collect::<Vec<_>>(), vec![Some("Female"), None]);
    /// ```
    pub fn from_reader<R>(reader: R) -> Result<Self, csv::Error>
    where
        R: io::Read,
    {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let mut headers = reader
            .headers()?
            .iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        if headers.iter().all(String::is_empty) {
            headers.clear();
        }
        let width = headers.len();

        let mut rows = vec![];
        for record in reader.records() {
            let record = record?;
            if record.len() > width {
                tracing::debug!(
                    line = record.position().map(csv::Position::line),
                    cells = record.len(),
                    width,
                    "dropping cells beyond the header width"
                );
            }
            let mut row = record.iter().map(str::to_owned).collect::<Vec<_>>();
            row.resize(width, String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Looks up a column by its (trimmed) header name.
    pub fn column(&self, name: &str) -> Result<Column<'_>, ColumnError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|index| Column { table: self, index })
            .ok_or_else(|| ColumnError::Missing {
                name: name.to_owned(),
            })
    }

    /// Looks up a column by a negative offset from the end, `-1` being the
    /// last column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use iaq_analysis::dataset::Table;
    /// let table = Table::from_reader("a,b,c\n1,2,3\n".as_bytes()).unwrap();
    /// assert_eq!(table.column_from_end(-1).unwrap().name(), "c");
    /// assert_eq!(table.column_from_end(-3).unwrap().name(), "a");
    /// assert!(table.column_from_end(-4).is_err());
    /// assert!(table.column_from_end(0).is_err());
    /// ```
    pub fn column_from_end(&self, offset: isize) -> Result<Column<'_>, ColumnError> {
        let width = self.num_columns();
        let out_of_range = || ColumnError::OffsetOutOfRange { offset, width };
        if offset >= 0 {
            return Err(out_of_range());
        }
        let index = width
            .checked_sub(offset.unsigned_abs())
            .ok_or_else(out_of_range)?;
        Ok(Column { table: self, index })
    }
}

/// A borrowed view of one column of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> Column<'a> {
    #[must_use]
    pub fn name(&self) -> &'a str {
        &self.table.headers[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Iterates over trimmed cell values, `None` for missing cells.
    pub fn cells(self) -> impl Iterator<Item = Option<&'a str>> + 'a {
        let index = self.index;
        self.table
            .rows
            .iter()
            .map(move |row| non_missing(&row[index]))
    }
}

/// Trims a raw cell, returning `None` if it holds no value.
#[must_use]
pub fn non_missing(raw: &str) -> Option<&str> {
    let value = raw.trim();
    if value.is_empty() || NULL_TOKENS.contains(&value) {
        None
    } else {
        Some(value)
    }
}
