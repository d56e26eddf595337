//! Student model

use crate::core::error::{RowError, ValidationError};
use crate::core::storage::{CsvRecord, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a student in the record system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier (e.g., "STU1042")
    pub student_id: String,

    /// Full name of the student
    pub name: String,

    /// Contact email; must contain `@`
    pub email: String,
}

impl Student {
    /// Create a new student
    ///
    /// # Arguments
    /// * `student_id` - Unique student ID
    /// * `name` - Full name
    /// * `email` - Email address
    #[must_use]
    pub const fn new(student_id: String, name: String, email: String) -> Self {
        Self {
            student_id,
            name,
            email,
        }
    }

    /// Validate field constraints, reporting the first failing field
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if the ID, name, or email is empty, or if
    /// the email contains no `@`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.student_id.is_empty() {
            return Err(ValidationError::EmptyField {
                record: "student",
                field: "student_id",
            });
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField {
                record: "student",
                field: "name",
            });
        }
        if self.email.is_empty() {
            return Err(ValidationError::EmptyField {
                record: "student",
                field: "email",
            });
        }
        if !self.email.contains('@') {
            return Err(ValidationError::EmailMissingAt(self.email.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Email: {}",
            self.student_id, self.name, self.email
        )
    }
}

impl CsvRecord for Student {
    const FILE_NAME: &'static str = "students.csv";
    const COLUMNS: &'static [&'static str] = &["student_id", "name", "email"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.student_id.clone(),
            self.name.clone(),
            self.email.clone(),
        ]
    }

    fn from_row(row: &Row<'_>) -> Result<Self, RowError> {
        Ok(Self::new(
            row.get("student_id")?.to_string(),
            row.get("name")?.to_string(),
            row.get("email")?.to_string(),
        ))
    }
}
