//! CSV report generator
//!
//! Exports the transcript rows as delimited data for spreadsheets or other
//! tools: one row per matched grade, in the same column order the report
//! context carries them. Summary figures stay in the human-readable formats.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Column header for exported transcript rows
const COLUMNS: [&str; 6] = [
    "course_code",
    "course_name",
    "grade",
    "points",
    "credit_units",
    "semester",
];

/// CSV report generator
pub struct CsvReporter;

impl CsvReporter {
    /// Create a new CSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(COLUMNS)?;

        for row in &ctx.rows {
            writer.write_record([
                row.course_code.as_str(),
                row.course_name.as_str(),
                row.letter.as_str(),
                &row.points.to_string(),
                &row.credit_units.to_string(),
                row.semester.as_str(),
            ])?;
        }

        let bytes = writer.into_inner()?;
        Ok(String::from_utf8(bytes)?)
    }
}
