//! Student command handlers

use crate::args::StudentCommand;
use gradebook::config::Config;
use gradebook::core::models::Student;
use logger::info;

/// Dispatch student subcommands
pub fn run(subcommand: StudentCommand, config: &Config) {
    match subcommand {
        StudentCommand::Add {
            student_id,
            name,
            email,
        } => add(student_id, name, email, config),
        StudentCommand::List { query } => list(query.as_deref(), config),
        StudentCommand::Update {
            student_id,
            name,
            email,
        } => update(student_id, name, email, config),
        StudentCommand::Remove { student_id } => remove(&student_id, config),
    }
}

fn add(student_id: String, name: String, email: String, config: &Config) {
    let (store, mut registry) = super::load_registry(config);

    match registry.add_student(Student::new(student_id.clone(), name, email)) {
        Ok(()) => {
            super::save_registry(&store, &registry);
            info!("Student {student_id} added");
            println!("✓ Student {student_id} added");
        }
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

fn list(query: Option<&str>, config: &Config) {
    let (_store, registry) = super::load_registry(config);

    let students: Vec<&Student> = match query {
        Some(q) => registry.search_students(q),
        None => registry.students().iter().collect(),
    };

    if students.is_empty() {
        println!("No students found.");
        return;
    }
    for student in students {
        println!("{student}");
    }
}

fn update(student_id: String, name: String, email: String, config: &Config) {
    let (store, mut registry) = super::load_registry(config);

    match registry.update_student(Student::new(student_id.clone(), name, email)) {
        Ok(()) => {
            super::save_registry(&store, &registry);
            info!("Student {student_id} updated");
            println!("✓ Student {student_id} updated");
        }
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

fn remove(student_id: &str, config: &Config) {
    let (store, mut registry) = super::load_registry(config);

    match registry.remove_student(student_id) {
        Ok(removed) => {
            super::save_registry(&store, &registry);
            info!("Student {} removed", removed.student_id);
            println!("✓ Student {} removed", removed.student_id);
        }
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}
