//! Report assembly for a single student
//!
//! Joins a student's grades against the course catalog to build the tabular
//! rows and summary figures a renderer needs: one row per matched grade,
//! per-semester GPA summaries, the cumulative GPA, and the grade
//! distribution. Rendering itself lives in [`formats`].

pub mod formats;

pub use formats::{CsvReporter, MarkdownReporter, ReportFormat};

use crate::core::gpa::{self, Distribution};
use crate::core::models::{Course, Grade, GradeLetter, Student};
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;

/// One transcript row: a grade joined with its course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Course code the grade was earned in
    pub course_code: String,
    /// Course name from the catalog
    pub course_name: String,
    /// The letter earned
    pub letter: GradeLetter,
    /// Point value of the letter
    pub points: u32,
    /// Credit units of the course
    pub credit_units: u32,
    /// Semester label of the grade
    pub semester: String,
}

/// GPA for one semester's grade group
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterSummary {
    /// Semester label, exactly as recorded
    pub semester: String,
    /// Credit-weighted GPA over that semester's grades
    pub gpa: f64,
}

/// Sort key for semester labels
///
/// Labels like "2023/2024 Semester 1" parse into (start year, term number)
/// so that terms order chronologically even where raw string order would
/// not. Labels that do not parse fall back to raw string comparison and
/// sort after all parsed labels.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SemesterKey {
    /// Start year, term number, and the full label as a tiebreaker
    Parsed(u32, u32, String),
    /// Unparseable label, compared as-is
    Raw(String),
}

impl SemesterKey {
    /// Parse a semester label into its sort key
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let year = label
            .split_whitespace()
            .next()
            .and_then(|token| token.split('/').next())
            .and_then(|year| year.parse::<u32>().ok());
        let term = label
            .split_whitespace()
            .last()
            .and_then(|token| token.parse::<u32>().ok());

        match (year, term) {
            (Some(year), Some(term)) => Self::Parsed(year, term, label.to_string()),
            _ => Self::Raw(label.to_string()),
        }
    }
}

/// Data context for rendering one student's grade report
///
/// This aggregates everything a renderer needs, providing a single source
/// of truth for templates.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// The student being reported on
    pub student: &'a Student,
    /// One row per grade with a matching course, in grade order
    pub rows: Vec<ReportRow>,
    /// Per-semester GPA, in semester order
    pub semesters: Vec<SemesterSummary>,
    /// Cumulative GPA over the whole grade subset
    pub cgpa: f64,
    /// Count per letter, all six letters always present
    pub distribution: Distribution,
}

impl<'a> ReportContext<'a> {
    /// Assemble the report data for one student
    ///
    /// `grades` is the student's grade subset; callers pass whatever slice
    /// of history they want reported. Grades whose course code has no match
    /// in `courses` are skipped in the rows, not errored on. Semester
    /// grouping is by exact string equality, case-sensitive.
    #[must_use]
    pub fn build(student: &'a Student, grades: &[Grade], courses: &[Course]) -> Self {
        let rows = grades
            .iter()
            .filter_map(|grade| {
                courses
                    .iter()
                    .find(|c| c.code == grade.course_code)
                    .map(|course| ReportRow {
                        course_code: grade.course_code.clone(),
                        course_name: course.name.clone(),
                        letter: grade.letter,
                        points: grade.points(),
                        credit_units: course.credit_units,
                        semester: grade.semester.clone(),
                    })
            })
            .collect();

        let mut by_semester: BTreeMap<String, Vec<Grade>> = BTreeMap::new();
        for grade in grades {
            by_semester
                .entry(grade.semester.clone())
                .or_default()
                .push(grade.clone());
        }

        let mut semesters: Vec<SemesterSummary> = by_semester
            .into_iter()
            .map(|(semester, semester_grades)| SemesterSummary {
                gpa: gpa::semester_gpa(&semester_grades, courses),
                semester,
            })
            .collect();
        semesters.sort_by_key(|summary| SemesterKey::from_label(&summary.semester));

        Self {
            student,
            rows,
            semesters,
            cgpa: gpa::cumulative_gpa(grades, courses),
            distribution: gpa::grade_distribution(grades),
        }
    }

    /// Total credit units across the matched rows
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.rows.iter().map(|row| row.credit_units).sum()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Grade, GradeLetter, Student};

    fn student() -> Student {
        Student::new(
            "STU1001".to_string(),
            "Ada Obi".to_string(),
            "ada@example.com".to_string(),
        )
    }

    fn catalog() -> Vec<Course> {
        vec![
            Course::new(
                "CSC101".to_string(),
                "Introduction to Computer Science".to_string(),
                3,
                "2023/2024 Semester 1".to_string(),
            ),
            Course::new(
                "MTH102".to_string(),
                "Calculus I".to_string(),
                4,
                "2023/2024 Semester 2".to_string(),
            ),
        ]
    }

    fn grade(course_code: &str, letter: GradeLetter, semester: &str) -> Grade {
        Grade::new(
            "STU1001".to_string(),
            course_code.to_string(),
            letter,
            semester.to_string(),
        )
    }

    #[test]
    fn test_semester_key_orders_terms_chronologically() {
        let a = SemesterKey::from_label("2023/2024 Semester 2");
        let b = SemesterKey::from_label("2024/2025 Semester 1");
        assert!(a < b);

        let first = SemesterKey::from_label("2023/2024 Semester 1");
        let second = SemesterKey::from_label("2023/2024 Semester 2");
        assert!(first < second);
    }

    #[test]
    fn test_semester_key_falls_back_to_raw_order() {
        let fall = SemesterKey::from_label("Fall Term");
        let spring = SemesterKey::from_label("Spring Term");
        assert!(fall < spring);

        // Parsed labels sort before unparseable ones.
        let parsed = SemesterKey::from_label("2023/2024 Semester 1");
        assert!(parsed < fall);
    }

    #[test]
    fn test_build_joins_rows_and_skips_unmatched() {
        let student = student();
        let courses = catalog();
        let grades = vec![
            grade("CSC101", GradeLetter::A, "2023/2024 Semester 1"),
            grade("GHOST", GradeLetter::F, "2023/2024 Semester 1"),
        ];

        let ctx = ReportContext::build(&student, &grades, &courses);

        assert_eq!(ctx.rows.len(), 1);
        assert_eq!(ctx.rows[0].course_code, "CSC101");
        assert_eq!(ctx.rows[0].course_name, "Introduction to Computer Science");
        assert_eq!(ctx.rows[0].points, 5);
        assert_eq!(ctx.rows[0].credit_units, 3);
        assert_eq!(ctx.total_credits(), 3);
    }

    #[test]
    fn test_build_groups_semesters_in_order() {
        let student = student();
        let courses = catalog();
        let grades = vec![
            grade("MTH102", GradeLetter::B, "2023/2024 Semester 2"),
            grade("CSC101", GradeLetter::A, "2023/2024 Semester 1"),
        ];

        let ctx = ReportContext::build(&student, &grades, &courses);

        assert_eq!(ctx.semesters.len(), 2);
        assert_eq!(ctx.semesters[0].semester, "2023/2024 Semester 1");
        assert!((ctx.semesters[0].gpa - 5.0).abs() < f64::EPSILON);
        assert_eq!(ctx.semesters[1].semester, "2023/2024 Semester 2");
        assert!((ctx.semesters[1].gpa - 4.0).abs() < f64::EPSILON);

        // (5*3 + 4*4) / 7 = 4.428... -> 4.43
        assert!((ctx.cgpa - 4.43).abs() < f64::EPSILON);
    }

    #[test]
    fn test_semester_grouping_is_case_sensitive() {
        let student = student();
        let courses = catalog();
        let grades = vec![
            grade("CSC101", GradeLetter::A, "2023/2024 Semester 1"),
            grade("MTH102", GradeLetter::B, "2023/2024 semester 1"),
        ];

        let ctx = ReportContext::build(&student, &grades, &courses);
        assert_eq!(ctx.semesters.len(), 2);
    }
}
