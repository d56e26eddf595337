//! Grade model and the fixed A-F letter scale

use crate::core::error::{RowError, ValidationError};
use crate::core::storage::{CsvRecord, Row};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade on the 5-point scale (A=5 through F=0)
///
/// Making the letter a closed enum keeps out-of-set letters unrepresentable;
/// anything textual goes through [`FromStr`], which also normalizes case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GradeLetter {
    /// 5 points
    A,
    /// 4 points
    B,
    /// 3 points
    C,
    /// 2 points
    D,
    /// 1 point
    E,
    /// 0 points
    F,
}

impl GradeLetter {
    /// All six letters in scale order, A through F
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Point value on the fixed 5-point scale
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::A => 5,
            Self::B => 4,
            Self::C => 3,
            Self::D => 2,
            Self::E => 1,
            Self::F => 0,
        }
    }

    /// Letter as a one-character string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

impl FromStr for GradeLetter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            _ => Err(ValidationError::InvalidGradeLetter(s.to_string())),
        }
    }
}

impl fmt::Display for GradeLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents one letter grade earned by a student in a course
///
/// Grades reference students and courses by key only; the collections are
/// flat and joined at computation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    /// ID of the student the grade belongs to
    pub student_id: String,

    /// Code of the course the grade was earned in
    pub course_code: String,

    /// The letter earned
    pub letter: GradeLetter,

    /// Semester label the grade was earned in
    pub semester: String,
}

impl Grade {
    /// Create a new grade
    ///
    /// # Arguments
    /// * `student_id` - Student the grade belongs to
    /// * `course_code` - Course the grade was earned in
    /// * `letter` - The letter earned
    /// * `semester` - Free-form semester label
    #[must_use]
    pub const fn new(
        student_id: String,
        course_code: String,
        letter: GradeLetter,
        semester: String,
    ) -> Self {
        Self {
            student_id,
            course_code,
            letter,
            semester,
        }
    }

    /// Create a grade from a textual letter, normalizing case
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if `letter` is not one of A-F in either
    /// case.
    pub fn parse(
        student_id: String,
        course_code: String,
        letter: &str,
        semester: String,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            student_id,
            course_code,
            letter.parse()?,
            semester,
        ))
    }

    /// Point value of the letter on the fixed 5-point scale
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.letter.points()
    }

    /// Validate field constraints, reporting the first failing field
    ///
    /// The letter needs no check here; it is already constrained by its type.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if the student ID, course code, or
    /// semester is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.student_id.is_empty() {
            return Err(ValidationError::EmptyField {
                record: "grade",
                field: "student_id",
            });
        }
        if self.course_code.is_empty() {
            return Err(ValidationError::EmptyField {
                record: "grade",
                field: "course_code",
            });
        }
        if self.semester.is_empty() {
            return Err(ValidationError::EmptyField {
                record: "grade",
                field: "semester",
            });
        }
        Ok(())
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student: {}, Course: {}, Grade: {}, Semester: {}",
            self.student_id, self.course_code, self.letter, self.semester
        )
    }
}

impl CsvRecord for Grade {
    const FILE_NAME: &'static str = "grades.csv";
    const COLUMNS: &'static [&'static str] = &["student_id", "course_code", "grade", "semester"];

    fn to_row(&self) -> Vec<String> {
        vec![
            self.student_id.clone(),
            self.course_code.clone(),
            self.letter.to_string(),
            self.semester.clone(),
        ]
    }

    fn from_row(row: &Row<'_>) -> Result<Self, RowError> {
        let raw_letter = row.get("grade")?;
        let letter: GradeLetter = raw_letter
            .parse()
            .map_err(|source| RowError::InvalidValue {
                column: "grade",
                source,
            })?;

        Ok(Self::new(
            row.get("student_id")?.to_string(),
            row.get("course_code")?.to_string(),
            letter,
            row.get("semester")?.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_scale() {
        assert_eq!(GradeLetter::A.points(), 5);
        assert_eq!(GradeLetter::B.points(), 4);
        assert_eq!(GradeLetter::C.points(), 3);
        assert_eq!(GradeLetter::D.points(), 2);
        assert_eq!(GradeLetter::E.points(), 1);
        assert_eq!(GradeLetter::F.points(), 0);
    }

    #[test]
    fn test_lowercase_letter_normalizes() {
        let grade = Grade::parse(
            "STU1001".to_string(),
            "CSC101".to_string(),
            "a",
            "2023/2024 Semester 1".to_string(),
        )
        .unwrap();

        assert_eq!(grade.letter, GradeLetter::A);
        assert_eq!(grade.points(), 5);
        assert!(grade.validate().is_ok());
    }

    #[test]
    fn test_letter_outside_set_rejected() {
        let result = Grade::parse(
            "STU1001".to_string(),
            "CSC101".to_string(),
            "G",
            "2023/2024 Semester 1".to_string(),
        );

        assert_eq!(
            result,
            Err(ValidationError::InvalidGradeLetter("G".to_string()))
        );
    }

    #[test]
    fn test_empty_semester_fails_validation() {
        let grade = Grade::new(
            "STU1001".to_string(),
            "CSC101".to_string(),
            GradeLetter::B,
            String::new(),
        );

        assert_eq!(
            grade.validate(),
            Err(ValidationError::EmptyField {
                record: "grade",
                field: "semester",
            })
        );
    }

    #[test]
    fn test_row_order_matches_columns() {
        let grade = Grade::new(
            "STU1001".to_string(),
            "CSC101".to_string(),
            GradeLetter::B,
            "2023/2024 Semester 1".to_string(),
        );

        assert_eq!(
            Grade::COLUMNS,
            &["student_id", "course_code", "grade", "semester"]
        );
        assert_eq!(
            grade.to_row(),
            vec!["STU1001", "CSC101", "B", "2023/2024 Semester 1"]
        );
    }
}
