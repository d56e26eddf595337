//! Course command handlers

use crate::args::CourseCommand;
use gradebook::config::Config;
use gradebook::core::models::Course;
use logger::info;

/// Dispatch course subcommands
pub fn run(subcommand: CourseCommand, config: &Config) {
    match subcommand {
        CourseCommand::Add {
            code,
            name,
            credit_units,
            semester,
        } => add(code, name, credit_units, semester, config),
        CourseCommand::List => list(config),
        CourseCommand::Remove { code } => remove(&code, config),
    }
}

fn add(code: String, name: String, credit_units: u32, semester: String, config: &Config) {
    let (store, mut registry) = super::load_registry(config);

    match registry.add_course(Course::new(code.clone(), name, credit_units, semester)) {
        Ok(()) => {
            super::save_registry(&store, &registry);
            info!("Course {code} added");
            println!("✓ Course {code} added");
        }
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

fn list(config: &Config) {
    let (_store, registry) = super::load_registry(config);

    if registry.courses().is_empty() {
        println!("No courses found.");
        return;
    }
    for course in registry.courses() {
        println!("{course}");
    }
}

fn remove(code: &str, config: &Config) {
    let (store, mut registry) = super::load_registry(config);

    match registry.remove_course(code) {
        Ok(removed) => {
            super::save_registry(&store, &registry);
            info!("Course {} removed", removed.code);
            println!("✓ Course {} removed", removed.code);
        }
        Err(err) => {
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}
