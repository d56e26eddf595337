//! Error types for record validation, persistence, and registry operations

use std::path::PathBuf;
use thiserror::Error;

/// A record failed a field constraint.
///
/// Validation reports the first failing field only, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required string field was empty.
    #[error("{record} {field} must be a non-empty string")]
    EmptyField {
        /// Record type name (e.g., "student")
        record: &'static str,
        /// Field name within the record
        field: &'static str,
    },

    /// An email address without an `@`.
    #[error("email must contain '@', got {0:?}")]
    EmailMissingAt(String),

    /// Credit units outside the accepted 1-6 range.
    #[error("credit units must be between 1 and 6, got {0}")]
    CreditUnitsOutOfRange(u32),

    /// A letter outside the fixed A-F grade set.
    #[error("grade must be one of A, B, C, D, E, F, got {0:?}")]
    InvalidGradeLetter(String),

    /// A field that must hold an integer held something else.
    #[error("{field} must be an integer, got {value:?}")]
    NotAnInteger {
        /// Field name within the record
        field: &'static str,
        /// The raw value that failed to parse
        value: String,
    },
}

/// A single row of a persisted file could not be converted into a record.
///
/// Carries the failing column; the persistence adapter wraps this with the
/// file path and line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The header row has no column with this name.
    #[error("missing column {0:?}")]
    MissingColumn(&'static str),

    /// A column value failed a field constraint.
    #[error("column {column:?}: {source}")]
    InvalidValue {
        /// Column name of the offending value
        column: &'static str,
        /// The underlying field constraint failure
        source: ValidationError,
    },
}

/// A persisted collection could not be read or written.
#[derive(Debug, Error)]
pub enum DataFormatError {
    /// Filesystem access failed.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// Path that could not be accessed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The file is not well-formed delimited data.
    #[error("failed to parse {}: {source}", path.display())]
    Malformed {
        /// Path of the malformed file
        path: PathBuf,
        /// Underlying CSV-level error
        source: csv::Error,
    },

    /// A well-formed row did not convert into a record.
    #[error("{} line {line}: {source}", path.display())]
    Row {
        /// Path of the file containing the bad row
        path: PathBuf,
        /// 1-based line number of the bad row
        line: u64,
        /// What went wrong in the row
        source: RowError,
    },
}

/// A registry operation was rejected.
///
/// Duplicate-key and foreign-key rules are enforced here, at insertion,
/// rather than scattered across callers.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The record itself failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Loading or saving a backing file failed.
    #[error(transparent)]
    DataFormat(#[from] DataFormatError),

    /// A student with this ID is already registered.
    #[error("student ID {0:?} already exists")]
    DuplicateStudent(String),

    /// A course with this code is already registered.
    #[error("course code {0:?} already exists")]
    DuplicateCourse(String),

    /// This (student, course, semester) triple already has a grade.
    #[error("grade already exists for student {student_id:?} in {course_code:?} for {semester:?}")]
    DuplicateGrade {
        /// Student the grade belongs to
        student_id: String,
        /// Course the grade was earned in
        course_code: String,
        /// Semester label of the grade
        semester: String,
    },

    /// No student with this ID is registered.
    #[error("no student with ID {0:?}")]
    UnknownStudent(String),

    /// No course with this code is registered.
    #[error("no course with code {0:?}")]
    UnknownCourse(String),

    /// No grade recorded for this (student, course, semester) triple.
    #[error("no grade for student {student_id:?} in {course_code:?} for {semester:?}")]
    UnknownGrade {
        /// Student the lookup was for
        student_id: String,
        /// Course the lookup was for
        course_code: String,
        /// Semester label of the lookup
        semester: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::EmptyField {
            record: "student",
            field: "name",
        };
        assert_eq!(err.to_string(), "student name must be a non-empty string");

        let err = ValidationError::CreditUnitsOutOfRange(7);
        assert_eq!(err.to_string(), "credit units must be between 1 and 6, got 7");
    }

    #[test]
    fn test_row_error_names_column() {
        let err = RowError::MissingColumn("credit_units");
        assert!(err.to_string().contains("credit_units"));

        let err = RowError::InvalidValue {
            column: "credit_units",
            source: ValidationError::NotAnInteger {
                field: "credit_units",
                value: "abc".to_string(),
            },
        };
        let message = err.to_string();
        assert!(message.contains("credit_units"));
        assert!(message.contains("abc"));
    }

    #[test]
    fn test_data_format_error_names_line() {
        let err = DataFormatError::Row {
            path: PathBuf::from("data/courses.csv"),
            line: 3,
            source: RowError::MissingColumn("semester"),
        };
        let message = err.to_string();
        assert!(message.contains("courses.csv"));
        assert!(message.contains("line 3"));
        assert!(message.contains("semester"));
    }
}
