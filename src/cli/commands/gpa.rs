//! GPA command handler
//!
//! Prints per-semester GPAs, the cumulative GPA, and the letter
//! distribution for one student, or a single semester's figure when a
//! label is given.

use gradebook::config::Config;
use gradebook::core::models::Grade;
use gradebook::core::report::ReportContext;
use gradebook::core::{gpa, registry::Registry};
use std::fmt::Write;

/// Run the gpa command
pub fn run(student_id: &str, semester: Option<&str>, config: &Config) {
    let (_store, registry) = super::load_registry(config);

    let Some(student) = registry.student(student_id) else {
        eprintln!("✗ no student with ID {student_id:?}");
        std::process::exit(1);
    };

    let grades = registry.grades_for_student(student_id);

    if let Some(label) = semester {
        print_single_semester(&registry, &grades, label);
        return;
    }

    let ctx = ReportContext::build(student, &grades, registry.courses());

    println!("GPA summary for {} ({})", student.name, student.student_id);
    if ctx.semesters.is_empty() {
        println!("No grades on record.");
        return;
    }

    for summary in &ctx.semesters {
        println!("  {}: {:.2}", summary.semester, summary.gpa);
    }
    println!("CGPA: {:.2}", ctx.cgpa);

    let mut counts = String::new();
    for (letter, count) in &ctx.distribution {
        let _ = write!(counts, "{letter}={count} ");
    }
    println!("Distribution: {}", counts.trim_end());
}

fn print_single_semester(registry: &Registry, grades: &[Grade], label: &str) {
    let semester_grades: Vec<Grade> = grades
        .iter()
        .filter(|g| g.semester == label)
        .cloned()
        .collect();

    if semester_grades.is_empty() {
        println!("No grades recorded for {label}.");
        return;
    }

    let value = gpa::semester_gpa(&semester_grades, registry.courses());
    println!("GPA for {label}: {value:.2}");
}
