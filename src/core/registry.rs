//! Registry owning the student, course, and grade collections
//!
//! One service object replaces scattered per-caller bookkeeping: every
//! insert goes through validation, duplicate-key checks, and foreign-key
//! checks here, and persistence round-trips through one [`CsvStore`].

use crate::core::error::{DataFormatError, RegistryError};
use crate::core::models::{Course, Grade, GradeLetter, Student};
use crate::core::storage::CsvStore;

/// In-memory owner of the three record collections
///
/// Collections are flat and independently stored; grades reference students
/// and courses by key only. Insertion enforces key uniqueness and that both
/// foreign keys resolve; removal does not cascade, so a dangling grade can
/// exist afterward and is silently excluded from aggregates downstream.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    students: Vec<Student>,
    courses: Vec<Course>,
    grades: Vec<Grade>,
}

impl Registry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
            courses: Vec::new(),
            grades: Vec::new(),
        }
    }

    /// Load all three collections from a store
    ///
    /// Absent backing files load as empty collections.
    ///
    /// # Errors
    /// Returns a [`DataFormatError`] if any backing file fails to parse.
    pub fn load(store: &CsvStore) -> Result<Self, DataFormatError> {
        Ok(Self {
            students: store.load()?,
            courses: store.load()?,
            grades: store.load()?,
        })
    }

    /// Save all three collections to a store
    ///
    /// # Errors
    /// Returns a [`DataFormatError`] if any backing file fails to write.
    pub fn save(&self, store: &CsvStore) -> Result<(), DataFormatError> {
        store.save(&self.students)?;
        store.save(&self.courses)?;
        store.save(&self.grades)?;
        Ok(())
    }

    // --- Students ---

    /// All students, in insertion order
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Look up a student by ID
    #[must_use]
    pub fn student(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    /// Students whose ID or name contains `query`, case-insensitive
    #[must_use]
    pub fn search_students(&self, query: &str) -> Vec<&Student> {
        let needle = query.to_lowercase();
        self.students
            .iter()
            .filter(|s| {
                s.student_id.to_lowercase().contains(&needle)
                    || s.name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Add a student
    ///
    /// # Errors
    /// Returns a [`RegistryError`] if the student fails validation or its ID
    /// is already registered.
    pub fn add_student(&mut self, student: Student) -> Result<(), RegistryError> {
        student.validate()?;
        if self.student(&student.student_id).is_some() {
            return Err(RegistryError::DuplicateStudent(student.student_id));
        }
        self.students.push(student);
        Ok(())
    }

    /// Replace the student with the same ID
    ///
    /// # Errors
    /// Returns a [`RegistryError`] if the replacement fails validation or no
    /// student with that ID exists.
    pub fn update_student(&mut self, student: Student) -> Result<(), RegistryError> {
        student.validate()?;
        let existing = self
            .students
            .iter_mut()
            .find(|s| s.student_id == student.student_id)
            .ok_or_else(|| RegistryError::UnknownStudent(student.student_id.clone()))?;
        *existing = student;
        Ok(())
    }

    /// Remove a student by ID, returning the removed record
    ///
    /// Grades referencing the student are left in place.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownStudent`] if no such student exists.
    pub fn remove_student(&mut self, student_id: &str) -> Result<Student, RegistryError> {
        let index = self
            .students
            .iter()
            .position(|s| s.student_id == student_id)
            .ok_or_else(|| RegistryError::UnknownStudent(student_id.to_string()))?;
        Ok(self.students.remove(index))
    }

    // --- Courses ---

    /// All courses, in insertion order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by code
    #[must_use]
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Add a course
    ///
    /// # Errors
    /// Returns a [`RegistryError`] if the course fails validation or its
    /// code is already registered.
    pub fn add_course(&mut self, course: Course) -> Result<(), RegistryError> {
        course.validate()?;
        if self.course(&course.code).is_some() {
            return Err(RegistryError::DuplicateCourse(course.code));
        }
        self.courses.push(course);
        Ok(())
    }

    /// Replace the course with the same code
    ///
    /// # Errors
    /// Returns a [`RegistryError`] if the replacement fails validation or no
    /// course with that code exists.
    pub fn update_course(&mut self, course: Course) -> Result<(), RegistryError> {
        course.validate()?;
        let existing = self
            .courses
            .iter_mut()
            .find(|c| c.code == course.code)
            .ok_or_else(|| RegistryError::UnknownCourse(course.code.clone()))?;
        *existing = course;
        Ok(())
    }

    /// Remove a course by code, returning the removed record
    ///
    /// Grades referencing the course are left in place; they contribute
    /// nothing to aggregates until the course reappears.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownCourse`] if no such course exists.
    pub fn remove_course(&mut self, code: &str) -> Result<Course, RegistryError> {
        let index = self
            .courses
            .iter()
            .position(|c| c.code == code)
            .ok_or_else(|| RegistryError::UnknownCourse(code.to_string()))?;
        Ok(self.courses.remove(index))
    }

    // --- Grades ---

    /// All grades, in insertion order
    #[must_use]
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// All grades belonging to one student, cloned for aggregation
    #[must_use]
    pub fn grades_for_student(&self, student_id: &str) -> Vec<Grade> {
        self.grades
            .iter()
            .filter(|g| g.student_id == student_id)
            .cloned()
            .collect()
    }

    /// Look up the grade for a (student, course, semester) triple
    #[must_use]
    pub fn grade(&self, student_id: &str, course_code: &str, semester: &str) -> Option<&Grade> {
        self.grades.iter().find(|g| {
            g.student_id == student_id && g.course_code == course_code && g.semester == semester
        })
    }

    /// Add a grade
    ///
    /// Both foreign keys must resolve against the live collections, and the
    /// (student, course, semester) triple must not already hold a grade.
    ///
    /// # Errors
    /// Returns a [`RegistryError`] if the grade fails validation, references
    /// an unknown student or course, or duplicates an existing triple.
    pub fn add_grade(&mut self, grade: Grade) -> Result<(), RegistryError> {
        grade.validate()?;
        if self.student(&grade.student_id).is_none() {
            return Err(RegistryError::UnknownStudent(grade.student_id));
        }
        if self.course(&grade.course_code).is_none() {
            return Err(RegistryError::UnknownCourse(grade.course_code));
        }
        if self
            .grade(&grade.student_id, &grade.course_code, &grade.semester)
            .is_some()
        {
            return Err(RegistryError::DuplicateGrade {
                student_id: grade.student_id,
                course_code: grade.course_code,
                semester: grade.semester,
            });
        }
        self.grades.push(grade);
        Ok(())
    }

    /// Change the letter of an existing grade
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownGrade`] if the triple has no grade.
    pub fn update_grade(
        &mut self,
        student_id: &str,
        course_code: &str,
        semester: &str,
        letter: GradeLetter,
    ) -> Result<(), RegistryError> {
        let existing = self
            .grades
            .iter_mut()
            .find(|g| {
                g.student_id == student_id
                    && g.course_code == course_code
                    && g.semester == semester
            })
            .ok_or_else(|| RegistryError::UnknownGrade {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
                semester: semester.to_string(),
            })?;
        existing.letter = letter;
        Ok(())
    }

    /// Remove the grade for a (student, course, semester) triple
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownGrade`] if the triple has no grade.
    pub fn remove_grade(
        &mut self,
        student_id: &str,
        course_code: &str,
        semester: &str,
    ) -> Result<Grade, RegistryError> {
        let index = self
            .grades
            .iter()
            .position(|g| {
                g.student_id == student_id
                    && g.course_code == course_code
                    && g.semester == semester
            })
            .ok_or_else(|| RegistryError::UnknownGrade {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
                semester: semester.to_string(),
            })?;
        Ok(self.grades.remove(index))
    }
}
