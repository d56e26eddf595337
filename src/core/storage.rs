//! CSV-backed persistence for the record collections
//!
//! Each record type persists to its own flat file under a data directory,
//! one header row followed by one row per record. Quoting and escaping
//! follow RFC 4180 via the `csv` crate, so names and labels containing the
//! delimiter or quote character round-trip losslessly.

use crate::core::error::{DataFormatError, RowError, ValidationError};
use csv::StringRecord;
use std::fs;
use std::path::PathBuf;

/// Column-indexed view over one data row of a delimited file
///
/// Fields are addressed by header name, not position, so column order in a
/// hand-edited file does not matter on load. Save always writes the fixed
/// [`CsvRecord::COLUMNS`] order.
#[derive(Debug)]
pub struct Row<'a> {
    headers: &'a StringRecord,
    fields: &'a StringRecord,
}

impl<'a> Row<'a> {
    const fn new(headers: &'a StringRecord, fields: &'a StringRecord) -> Self {
        Self { headers, fields }
    }

    /// Get a field value by column name
    ///
    /// # Errors
    /// Returns [`RowError::MissingColumn`] if the header row has no such
    /// column or the row is shorter than the header.
    pub fn get(&self, column: &'static str) -> Result<&'a str, RowError> {
        self.headers
            .iter()
            .position(|header| header == column)
            .and_then(|index| self.fields.get(index))
            .ok_or(RowError::MissingColumn(column))
    }

    /// Get a field value by column name, coerced to an integer
    ///
    /// # Errors
    /// Returns [`RowError::MissingColumn`] if the column is absent, or
    /// [`RowError::InvalidValue`] if the value is not a non-negative integer.
    pub fn get_u32(&self, column: &'static str) -> Result<u32, RowError> {
        let raw = self.get(column)?;
        raw.trim()
            .parse::<u32>()
            .map_err(|_| RowError::InvalidValue {
                column,
                source: ValidationError::NotAnInteger {
                    field: column,
                    value: raw.to_string(),
                },
            })
    }
}

/// A record type that persists as one row of a delimited flat file
///
/// `COLUMNS` and `to_row` together form the record's canonical column form:
/// the header written on save equals `COLUMNS`, and `to_row` produces values
/// in exactly that order, so what is written is exactly what is read back.
pub trait CsvRecord: Sized {
    /// File name of the backing collection within the data directory
    const FILE_NAME: &'static str;

    /// Column names, in the fixed header order used for both save and load
    const COLUMNS: &'static [&'static str];

    /// Values for one row, in `COLUMNS` order
    fn to_row(&self) -> Vec<String>;

    /// Build a record from one parsed row
    ///
    /// # Errors
    /// Returns a [`RowError`] naming the offending column when a required
    /// column is absent or a value fails to coerce.
    fn from_row(row: &Row<'_>) -> Result<Self, RowError>;
}

/// Flat-file store rooted at a data directory
///
/// Writes are plain synchronous `std::fs` operations with no atomic rename
/// or journal; a crash mid-write can leave a truncated file.
#[derive(Debug, Clone)]
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    /// Create a store rooted at `data_dir`
    ///
    /// The directory is created lazily on first save, not here.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the backing file for record type `T`
    #[must_use]
    pub fn path_for<T: CsvRecord>(&self) -> PathBuf {
        self.data_dir.join(T::FILE_NAME)
    }

    /// Load the full collection of record type `T`
    ///
    /// An absent backing file is an empty collection, not an error. Rows are
    /// returned in file order.
    ///
    /// # Errors
    /// Returns a [`DataFormatError`] identifying the file, line, and column
    /// when a row cannot be parsed into a record; malformed rows are never
    /// silently skipped.
    pub fn load<T: CsvRecord>(&self) -> Result<Vec<T>, DataFormatError> {
        let path = self.path_for::<T>();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&path)
            .map_err(|source| DataFormatError::Malformed {
                path: path.clone(),
                source,
            })?;

        let headers = reader
            .headers()
            .map_err(|source| DataFormatError::Malformed {
                path: path.clone(),
                source,
            })?
            .clone();

        let mut items = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|source| DataFormatError::Malformed {
                path: path.clone(),
                source,
            })?;
            let line = record.position().map_or(0, csv::Position::line);

            let row = Row::new(&headers, &record);
            let item = T::from_row(&row).map_err(|source| DataFormatError::Row {
                path: path.clone(),
                line,
                source,
            })?;
            items.push(item);
        }

        Ok(items)
    }

    /// Save the full collection of record type `T`, replacing the file
    ///
    /// The data directory is created if missing. The header row comes from
    /// `T::COLUMNS`, followed by one row per item in input order. An empty
    /// collection writes a header-only file rather than leaving a stale file
    /// behind, so a save always reflects the collection it was given.
    ///
    /// # Errors
    /// Returns a [`DataFormatError`] if the directory cannot be created or
    /// the file cannot be written.
    pub fn save<T: CsvRecord>(&self, items: &[T]) -> Result<(), DataFormatError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| DataFormatError::Io {
            path: self.data_dir.clone(),
            source,
        })?;

        let path = self.path_for::<T>();
        let mut writer =
            csv::Writer::from_path(&path).map_err(|source| DataFormatError::Malformed {
                path: path.clone(),
                source,
            })?;

        writer
            .write_record(T::COLUMNS)
            .map_err(|source| DataFormatError::Malformed {
                path: path.clone(),
                source,
            })?;

        for item in items {
            writer
                .write_record(item.to_row())
                .map_err(|source| DataFormatError::Malformed {
                    path: path.clone(),
                    source,
                })?;
        }

        writer.flush().map_err(|source| DataFormatError::Io {
            path,
            source,
        })?;

        Ok(())
    }
}
