//! CLI argument definitions for `gradebook`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradebook::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// Register a new student.
    Add {
        /// Unique student ID
        #[arg(value_name = "ID")]
        student_id: String,
        /// Full name
        #[arg(value_name = "NAME")]
        name: String,
        /// Email address (must contain '@')
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// List students, optionally filtered by an ID or name substring.
    List {
        /// Case-insensitive substring to match against IDs and names
        #[arg(value_name = "QUERY")]
        query: Option<String>,
    },
    /// Replace the name and email of an existing student.
    Update {
        /// ID of the student to update
        #[arg(value_name = "ID")]
        student_id: String,
        /// New full name
        #[arg(value_name = "NAME")]
        name: String,
        /// New email address
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Remove a student by ID.
    ///
    /// The student's grades are kept on file; they no longer appear in any
    /// report once the student is gone.
    Remove {
        /// ID of the student to remove
        #[arg(value_name = "ID")]
        student_id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseCommand {
    /// Register a new course.
    Add {
        /// Unique course code
        #[arg(value_name = "CODE")]
        code: String,
        /// Full course name
        #[arg(value_name = "NAME")]
        name: String,
        /// Credit units, 1-6
        #[arg(value_name = "CREDITS")]
        credit_units: u32,
        /// Semester label (e.g., "2023/2024 Semester 1")
        #[arg(value_name = "SEMESTER")]
        semester: String,
    },
    /// List all courses.
    List,
    /// Remove a course by code.
    Remove {
        /// Code of the course to remove
        #[arg(value_name = "CODE")]
        code: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum GradeCommand {
    /// Record a letter grade for a student in a course.
    Add {
        /// ID of the student
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,
        /// Code of the course
        #[arg(value_name = "COURSE_CODE")]
        course_code: String,
        /// Letter grade A-F (either case)
        #[arg(value_name = "LETTER")]
        letter: String,
        /// Semester label the grade was earned in
        #[arg(value_name = "SEMESTER")]
        semester: String,
    },
    /// List grades, optionally only one student's.
    List {
        /// Restrict the listing to one student
        #[arg(value_name = "STUDENT_ID")]
        student_id: Option<String>,
    },
    /// Change the letter of an existing grade.
    Update {
        /// ID of the student
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,
        /// Code of the course
        #[arg(value_name = "COURSE_CODE")]
        course_code: String,
        /// Semester label of the grade
        #[arg(value_name = "SEMESTER")]
        semester: String,
        /// New letter grade A-F
        #[arg(value_name = "LETTER")]
        letter: String,
    },
    /// Remove the grade for a (student, course, semester) triple.
    Remove {
        /// ID of the student
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,
        /// Code of the course
        #[arg(value_name = "COURSE_CODE")]
        course_code: String,
        /// Semester label of the grade
        #[arg(value_name = "SEMESTER")]
        semester: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage student records.
    Student {
        #[command(subcommand)]
        subcommand: StudentCommand,
    },
    /// Manage course records.
    Course {
        #[command(subcommand)]
        subcommand: CourseCommand,
    },
    /// Manage grade records.
    Grade {
        #[command(subcommand)]
        subcommand: GradeCommand,
    },
    /// Display semester GPAs, CGPA, and grade distribution for a student.
    Gpa {
        /// ID of the student
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,

        /// Restrict the figure to one semester label
        #[arg(long, value_name = "LABEL")]
        semester: Option<String>,
    },
    /// Generate a grade report for a student.
    Report {
        /// ID of the student
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,

        /// Output file path (optional; defaults to the configured reports
        /// directory with the format's extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or csv
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradebook",
    about = "Gradebook command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config record data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config record data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config reports output directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports output directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g.,
    /// `--data-dir`) take precedence over long-form flags (e.g.,
    /// `--config-data-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_data_dir: None,
            data_dir: None,
            config_reports_dir: None,
            reports_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_dir.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli();
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_verbose = Some(true);
        cli.data_dir = Some(PathBuf::from("/records"));
        cli.reports_dir = Some(PathBuf::from("/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.data_dir, Some("/records".to_string()));
        assert_eq!(overrides.reports_dir, Some("/reports".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli();
        cli.config_data_dir = Some(PathBuf::from("/long/data"));
        cli.data_dir = Some(PathBuf::from("/short/data"));
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));
        cli.reports_dir = Some(PathBuf::from("/short/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.data_dir, Some("/short/data".to_string()));
        assert_eq!(overrides.reports_dir, Some("/short/reports".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli();
        cli.config_data_dir = Some(PathBuf::from("/long/data"));
        cli.config_reports_dir = Some(PathBuf::from("/long/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.data_dir, Some("/long/data".to_string()));
        assert_eq!(overrides.reports_dir, Some("/long/reports".to_string()));
    }
}
