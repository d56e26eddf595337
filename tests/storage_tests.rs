//! Integration tests for the CSV persistence adapter

use gradebook::core::error::DataFormatError;
use gradebook::core::models::{Course, Grade, GradeLetter, Student};
use gradebook::core::storage::CsvStore;
use std::fs;
use tempfile::TempDir;

fn temp_store() -> (TempDir, CsvStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = CsvStore::new(dir.path());
    (dir, store)
}

#[test]
fn test_all_three_collections_round_trip() {
    let (_dir, store) = temp_store();

    let students = vec![
        Student::new(
            "STU1001".to_string(),
            "Ada Obi".to_string(),
            "ada@example.com".to_string(),
        ),
        Student::new(
            "STU1002".to_string(),
            "Chinedu Okafor".to_string(),
            "chinedu@example.com".to_string(),
        ),
    ];
    let courses = vec![
        Course::new(
            "CSC101".to_string(),
            "Introduction to Computer Science".to_string(),
            3,
            "2023/2024 Semester 1".to_string(),
        ),
        Course::new(
            "MTH102".to_string(),
            "Calculus I".to_string(),
            4,
            "2023/2024 Semester 2".to_string(),
        ),
    ];
    let grades = vec![
        Grade::new(
            "STU1001".to_string(),
            "CSC101".to_string(),
            GradeLetter::A,
            "2023/2024 Semester 1".to_string(),
        ),
        Grade::new(
            "STU1001".to_string(),
            "MTH102".to_string(),
            GradeLetter::C,
            "2023/2024 Semester 2".to_string(),
        ),
    ];

    store.save(&students).unwrap();
    store.save(&courses).unwrap();
    store.save(&grades).unwrap();

    assert_eq!(store.load::<Student>().unwrap(), students);
    assert_eq!(store.load::<Course>().unwrap(), courses);
    assert_eq!(store.load::<Grade>().unwrap(), grades);
}

#[test]
fn test_headers_are_stable_across_cycles() {
    let (_dir, store) = temp_store();

    let students = vec![Student::new(
        "STU1001".to_string(),
        "Ada Obi".to_string(),
        "ada@example.com".to_string(),
    )];
    store.save(&students).unwrap();

    let first_pass = fs::read_to_string(store.path_for::<Student>()).unwrap();

    // Load and save again; the file must come out byte-identical
    let loaded: Vec<Student> = store.load().unwrap();
    store.save(&loaded).unwrap();
    let second_pass = fs::read_to_string(store.path_for::<Student>()).unwrap();

    assert_eq!(first_pass, second_pass);
    assert!(first_pass.starts_with("student_id,name,email\n"));
}

#[test]
fn test_quoted_fields_survive_round_trip() {
    let (_dir, store) = temp_store();

    let courses = vec![Course::new(
        "GST103".to_string(),
        "Logic, \"Critical\" Thinking\nand Rhetoric".to_string(),
        2,
        "2023/2024 Semester 1".to_string(),
    )];

    store.save(&courses).unwrap();
    let loaded: Vec<Course> = store.load().unwrap();
    assert_eq!(loaded, courses);
}

#[test]
fn test_absent_files_load_empty() {
    let (_dir, store) = temp_store();

    assert!(store.load::<Student>().unwrap().is_empty());
    assert!(store.load::<Course>().unwrap().is_empty());
    assert!(store.load::<Grade>().unwrap().is_empty());
}

#[test]
fn test_deleting_last_record_truncates_file() {
    let (_dir, store) = temp_store();

    let grades = vec![Grade::new(
        "STU1001".to_string(),
        "CSC101".to_string(),
        GradeLetter::B,
        "2023/2024 Semester 1".to_string(),
    )];
    store.save(&grades).unwrap();
    store.save::<Grade>(&[]).unwrap();

    // The stale grade must not resurface on the next load
    assert!(store.load::<Grade>().unwrap().is_empty());
}

#[test]
fn test_malformed_row_is_an_error_not_a_skip() {
    let (_dir, store) = temp_store();

    fs::write(
        store.path_for::<Course>(),
        "code,name,credit_units,semester\n\
         CSC101,Intro,3,2023/2024 Semester 1\n\
         MTH102,Calculus,four,2023/2024 Semester 1\n",
    )
    .unwrap();

    let err = store.load::<Course>().unwrap_err();
    match err {
        DataFormatError::Row { line, .. } => assert_eq!(line, 3),
        other => panic!("expected row error, got: {other}"),
    }
}

#[test]
fn test_unknown_letter_in_file_is_an_error() {
    let (_dir, store) = temp_store();

    fs::write(
        store.path_for::<Grade>(),
        "student_id,course_code,grade,semester\n\
         STU1001,CSC101,G,2023/2024 Semester 1\n",
    )
    .unwrap();

    let err = store.load::<Grade>().unwrap_err();
    assert!(err.to_string().contains("grade"));
    assert!(err.to_string().contains('G'));
}
