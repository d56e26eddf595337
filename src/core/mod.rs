//! Core module for the record collections, persistence, and GPA aggregation

pub mod config;
pub mod error;
pub mod gpa;
pub mod models;
pub mod registry;
pub mod report;
pub mod storage;

/// Returns the current version of the `gradebook` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
