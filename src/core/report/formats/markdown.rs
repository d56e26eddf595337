//! Markdown report generator
//!
//! Renders a student grade report as Markdown tables. These reports render
//! well in GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    fn render_template(ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        // Substitute student metadata
        output = output.replace("{{student_id}}", &ctx.student.student_id);
        output = output.replace("{{name}}", &ctx.student.name);
        output = output.replace("{{email}}", &ctx.student.email);

        // Substitute summary figures
        output = output.replace("{{cgpa}}", &format!("{:.2}", ctx.cgpa));
        output = output.replace("{{total_credits}}", &ctx.total_credits().to_string());

        // Generate tables
        output = output.replace("{{grades_table}}", &Self::generate_grades_table(ctx));
        output = output.replace("{{semester_table}}", &Self::generate_semester_table(ctx));
        output = output.replace(
            "{{distribution_table}}",
            &Self::generate_distribution_table(ctx),
        );

        output
    }

    /// Generate the per-grade transcript table
    fn generate_grades_table(ctx: &ReportContext) -> String {
        if ctx.rows.is_empty() {
            return "No graded courses on record.".to_string();
        }

        let mut table = String::new();
        table.push_str("| Course Code | Course Name | Grade | Points | Credits | Semester |\n");
        table.push_str("|---|---|---|---|---|---|\n");

        for row in &ctx.rows {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} | {} |",
                row.course_code,
                row.course_name,
                row.letter,
                row.points,
                row.credit_units,
                row.semester
            );
        }

        table
    }

    /// Generate the semester-by-semester GPA table
    fn generate_semester_table(ctx: &ReportContext) -> String {
        if ctx.semesters.is_empty() {
            return "No semesters on record.".to_string();
        }

        let mut table = String::new();
        table.push_str("| Semester | GPA |\n");
        table.push_str("|---|---|\n");

        for summary in &ctx.semesters {
            let _ = writeln!(table, "| {} | {:.2} |", summary.semester, summary.gpa);
        }

        table
    }

    /// Generate the letter distribution table, always six rows
    fn generate_distribution_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Grade | Count |\n");
        table.push_str("|---|---|\n");

        for (letter, count) in &ctx.distribution {
            let _ = writeln!(table, "| {letter} | {count} |");
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Grade, GradeLetter, Student};

    fn context_fixture() -> (Student, Vec<Grade>, Vec<Course>) {
        let student = Student::new(
            "STU1001".to_string(),
            "Ada Obi".to_string(),
            "ada@example.com".to_string(),
        );
        let courses = vec![Course::new(
            "CSC101".to_string(),
            "Introduction to Computer Science".to_string(),
            3,
            "2023/2024 Semester 1".to_string(),
        )];
        let grades = vec![Grade::new(
            "STU1001".to_string(),
            "CSC101".to_string(),
            GradeLetter::A,
            "2023/2024 Semester 1".to_string(),
        )];
        (student, grades, courses)
    }

    #[test]
    fn test_render_contains_rows_and_cgpa() {
        let (student, grades, courses) = context_fixture();
        let ctx = ReportContext::build(&student, &grades, &courses);

        let rendered = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(rendered.contains("Ada Obi"));
        assert!(rendered.contains("| CSC101 | Introduction to Computer Science | A | 5 | 3 |"));
        assert!(rendered.contains("**5.00**"));
        assert!(!rendered.contains("{{"), "unreplaced placeholder: {rendered}");
    }

    #[test]
    fn test_render_distribution_has_six_rows() {
        let (student, grades, courses) = context_fixture();
        let ctx = ReportContext::build(&student, &grades, &courses);

        let rendered = MarkdownReporter::new().render(&ctx).unwrap();

        for letter in ["| A | 1 |", "| B | 0 |", "| F | 0 |"] {
            assert!(rendered.contains(letter), "missing {letter}");
        }
    }

    #[test]
    fn test_render_empty_grade_set() {
        let student = Student::new(
            "STU1001".to_string(),
            "Ada Obi".to_string(),
            "ada@example.com".to_string(),
        );
        let ctx = ReportContext::build(&student, &[], &[]);

        let rendered = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(rendered.contains("No graded courses on record."));
        assert!(rendered.contains("**0.00**"));
    }
}
