//! Course model

use crate::core::error::{RowError, ValidationError};
use crate::core::storage::{CsvRecord, Row};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest accepted credit-unit weight
pub const MIN_CREDIT_UNITS: u32 = 1;

/// Highest accepted credit-unit weight
pub const MAX_CREDIT_UNITS: u32 = 6;

/// Represents a course offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (e.g., "CSC101")
    pub code: String,

    /// Full course name (e.g., "Introduction to Computer Science")
    pub name: String,

    /// Credit units, 1-6 inclusive; weights the course in GPA averages
    pub credit_units: u32,

    /// Semester label the course is offered in (e.g., "2023/2024 Semester 1")
    pub semester: String,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `code` - Unique course code
    /// * `name` - Course name
    /// * `credit_units` - Credit units (1-6)
    /// * `semester` - Free-form semester label
    #[must_use]
    pub const fn new(code: String, name: String, credit_units: u32, semester: String) -> Self {
        Self {
            code,
            name,
            credit_units,
            semester,
        }
    }

    /// Validate field constraints, reporting the first failing field
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if the code, name, or semester is empty,
    /// or if `credit_units` falls outside 1-6.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.code.is_empty() {
            return Err(ValidationError::EmptyField {
                record: "course",
                field: "code",
            });
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField {
                record: "course",
                field: "name",
            });
        }
        if self.credit_units < MIN_CREDIT_UNITS || self.credit_units > MAX_CREDIT_UNITS {
            return Err(ValidationError::CreditUnitsOutOfRange(self.credit_units));
        }
        if self.semester.is_empty() {
            return Err(ValidationError::EmptyField {
                record: "course",
                field: "semester",
            });
        }
        Ok(())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Code: {}, Name: {}, Credits: {}, Semester: {}",
            self.code, self.name, self.credit_units, self.semester
        )
    }
}

impl CsvRecord for Course {
    const FILE_NAME: &'static str = "courses.csv";
    const COLUMNS: &'static [&'static str] = &["code", "name", "credit_units", "semester"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.name.clone(),
            self.credit_units.to_string(),
            self.semester.clone(),
        ]
    }

    fn from_row(row: &Row<'_>) -> Result<Self, RowError> {
        Ok(Self::new(
            row.get("code")?.to_string(),
            row.get("name")?.to_string(),
            row.get_u32("credit_units")?,
            row.get("semester")?.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_with_credits(credit_units: u32) -> Course {
        Course::new(
            "CSC101".to_string(),
            "Introduction to Computer Science".to_string(),
            credit_units,
            "2023/2024 Semester 1".to_string(),
        )
    }

    #[test]
    fn test_course_creation() {
        let course = course_with_credits(3);

        assert_eq!(course.code, "CSC101");
        assert_eq!(course.name, "Introduction to Computer Science");
        assert_eq!(course.credit_units, 3);
        assert_eq!(course.semester, "2023/2024 Semester 1");
        assert!(course.validate().is_ok());
    }

    #[test]
    fn test_credit_units_range() {
        assert!(course_with_credits(1).validate().is_ok());
        assert!(course_with_credits(6).validate().is_ok());

        assert_eq!(
            course_with_credits(0).validate(),
            Err(ValidationError::CreditUnitsOutOfRange(0))
        );
        assert_eq!(
            course_with_credits(7).validate(),
            Err(ValidationError::CreditUnitsOutOfRange(7))
        );
    }

    #[test]
    fn test_empty_code_fails_validation() {
        let course = Course::new(
            String::new(),
            "Introduction to Computer Science".to_string(),
            3,
            "2023/2024 Semester 1".to_string(),
        );

        assert_eq!(
            course.validate(),
            Err(ValidationError::EmptyField {
                record: "course",
                field: "code",
            })
        );
    }

    #[test]
    fn test_row_order_matches_columns() {
        let course = course_with_credits(4);

        assert_eq!(Course::COLUMNS, &["code", "name", "credit_units", "semester"]);
        assert_eq!(
            course.to_row(),
            vec![
                "CSC101",
                "Introduction to Computer Science",
                "4",
                "2023/2024 Semester 1"
            ]
        );
    }
}
