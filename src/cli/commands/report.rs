//! Report command handler
//!
//! Generates a grade report for one student in the requested format,
//! defaulting the output location to the configured reports directory.

use gradebook::config::Config;
use gradebook::core::report::{
    CsvReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use logger::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `student_id` - ID of the student to report on
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, csv)
/// * `config` - Configuration containing the default reports directory
pub fn run(student_id: &str, output_file: Option<&Path>, format_str: &str, config: &Config) {
    match generate_report(student_id, output_file, format_str, config) {
        Ok(report_path) => {
            info!("Report generated for {student_id}: {}", report_path.display());
            println!("✓ Report generated: {}", report_path.display());
        }
        Err(err) => {
            error!("Report generation failed for {student_id}: {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

/// Load the registry, assemble the report context, and render it
fn generate_report(
    student_id: &str,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format =
        ReportFormat::from_str(format_str).map_err(|err| format!("✗ {err}"))?;

    let (_store, registry) = super::load_registry(config);

    let student = registry
        .student(student_id)
        .ok_or_else(|| format!("✗ No student with ID {student_id:?}"))?;

    let grades = registry.grades_for_student(student_id);
    let ctx = ReportContext::build(student, &grades, registry.courses());

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => {
            let reports_dir = PathBuf::from(&config.paths.reports_dir);
            std::fs::create_dir_all(&reports_dir).map_err(|err| {
                format!(
                    "✗ Failed to create reports directory {}: {err}",
                    reports_dir.display()
                )
            })?;
            reports_dir.join(format!("{student_id}_report.{}", format.extension()))
        }
    };

    let generator: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    };

    generator
        .generate(&ctx, &output_path)
        .map_err(|err| format!("✗ Failed to write {}: {err}", output_path.display()))?;

    Ok(output_path)
}
