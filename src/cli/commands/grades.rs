//! Grade command handlers

use crate::args::GradeCommand;
use gradebook::config::Config;
use gradebook::core::models::{Grade, GradeLetter};
use logger::info;

/// Dispatch grade subcommands
pub fn run(subcommand: GradeCommand, config: &Config) {
    match subcommand {
        GradeCommand::Add {
            student_id,
            course_code,
            letter,
            semester,
        } => add(student_id, course_code, &letter, semester, config),
        GradeCommand::List { student_id } => list(student_id.as_deref(), config),
        GradeCommand::Update {
            student_id,
            course_code,
            semester,
            letter,
        } => update(&student_id, &course_code, &semester, &letter, config),
        GradeCommand::Remove {
            student_id,
            course_code,
            semester,
        } => remove(&student_id, &course_code, &semester, config),
    }
}

fn add(student_id: String, course_code: String, letter: &str, semester: String, config: &Config) {
    let (store, mut registry) = super::load_registry(config);

    let grade = match Grade::parse(student_id, course_code, letter, semester) {
        Ok(grade) => grade,
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    };

    let description = grade.to_string();
    match registry.add_grade(grade) {
        Ok(()) => {
            super::save_registry(&store, &registry);
            info!("Grade recorded: {description}");
            println!("✓ Grade recorded: {description}");
        }
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

fn list(student_id: Option<&str>, config: &Config) {
    let (_store, registry) = super::load_registry(config);

    let grades: Vec<&Grade> = match student_id {
        Some(id) => registry
            .grades()
            .iter()
            .filter(|g| g.student_id == id)
            .collect(),
        None => registry.grades().iter().collect(),
    };

    if grades.is_empty() {
        println!("No grades found.");
        return;
    }
    for grade in grades {
        println!("{grade}");
    }
}

fn update(student_id: &str, course_code: &str, semester: &str, letter: &str, config: &Config) {
    let (store, mut registry) = super::load_registry(config);

    let letter: GradeLetter = match letter.parse() {
        Ok(letter) => letter,
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    };

    match registry.update_grade(student_id, course_code, semester, letter) {
        Ok(()) => {
            super::save_registry(&store, &registry);
            info!("Grade updated for {student_id} in {course_code} ({semester})");
            println!("✓ Grade updated: {student_id} in {course_code} ({semester}) is now {letter}");
        }
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

fn remove(student_id: &str, course_code: &str, semester: &str, config: &Config) {
    let (store, mut registry) = super::load_registry(config);

    match registry.remove_grade(student_id, course_code, semester) {
        Ok(removed) => {
            super::save_registry(&store, &registry);
            info!("Grade removed: {removed}");
            println!("✓ Grade removed: {removed}");
        }
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}
