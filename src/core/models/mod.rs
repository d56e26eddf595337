//! Data models for `gradebook`

pub mod course;
pub mod grade;
pub mod student;

pub use course::Course;
pub use grade::{Grade, GradeLetter};
pub use student::Student;
