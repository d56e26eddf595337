//! Command handlers for the CLI

pub mod config;
pub mod courses;
pub mod gpa;
pub mod grades;
pub mod report;
pub mod students;

use gradebook::config::Config;
use gradebook::core::registry::Registry;
use gradebook::core::storage::CsvStore;
use logger::error;

/// Open the configured data directory and load the registry from it.
///
/// Exits the process when a backing file cannot be parsed; handlers always
/// start from a consistent in-memory state.
fn load_registry(config: &Config) -> (CsvStore, Registry) {
    let store = CsvStore::new(&config.paths.data_dir);
    match Registry::load(&store) {
        Ok(registry) => (store, registry),
        Err(err) => {
            error!("Failed to load records: {err}");
            eprintln!("✗ {err}");
            std::process::exit(1);
        }
    }
}

/// Persist the registry back to its store, exiting on failure.
fn save_registry(store: &CsvStore, registry: &Registry) {
    if let Err(err) = registry.save(store) {
        error!("Failed to save records: {err}");
        eprintln!("✗ {err}");
        std::process::exit(1);
    }
}
