//! GPA aggregation over grade and course collections
//!
//! Pure functions over immutable slices: no I/O, no mutation, and no
//! dependency on input order. Grades are weighted by the credit units of
//! their course on the fixed 5-point scale (A=5 through F=0).

use crate::core::models::{Course, Grade, GradeLetter};
use std::collections::BTreeMap;

/// Grade counts keyed by letter; every letter A-F is always present
pub type Distribution = BTreeMap<GradeLetter, usize>;

/// Round to two decimal places, half away from zero
///
/// GPA inputs are non-negative, so this is round-half-up.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Credit-weighted average over `grades`, looking credit units up in `courses`
///
/// A grade whose course code has no match in `courses` contributes nothing,
/// to neither the point sum nor the credit sum. Courses are expected to be
/// uniquely keyed by code; with duplicates the first match wins.
fn weighted_gpa(grades: &[Grade], courses: &[Course]) -> f64 {
    let mut total_points = 0;
    let mut total_credits = 0;

    for grade in grades {
        let Some(course) = courses.iter().find(|c| c.code == grade.course_code) else {
            continue;
        };
        total_points += grade.points() * course.credit_units;
        total_credits += course.credit_units;
    }

    if total_credits == 0 {
        return 0.0;
    }

    round2(f64::from(total_points) / f64::from(total_credits))
}

/// GPA for one semester's grade set, rounded to two decimal places
///
/// This function is semester-agnostic: it averages whatever grades it is
/// given. Callers wanting a true per-semester figure must pre-filter the
/// grade slice to a single semester first.
///
/// Returns exactly `0.0` for an empty grade slice, or when no grade matches
/// a course (nothing to weight by).
#[must_use]
pub fn semester_gpa(grades: &[Grade], courses: &[Course]) -> f64 {
    weighted_gpa(grades, courses)
}

/// Cumulative GPA (CGPA) across an arbitrary grade set
///
/// Same weighted-average formula as [`semester_gpa`], conventionally invoked
/// with a student's full grade history rather than one semester's slice.
#[must_use]
pub fn cumulative_gpa(all_grades: &[Grade], courses: &[Course]) -> f64 {
    weighted_gpa(all_grades, courses)
}

/// Count grades per letter
///
/// Every one of the six letters is present in the output, at zero when
/// unused. Downstream renderers rely on always getting six entries.
#[must_use]
pub fn grade_distribution(grades: &[Grade]) -> Distribution {
    let mut distribution: Distribution = GradeLetter::ALL.iter().map(|&l| (l, 0)).collect();
    for grade in grades {
        if let Some(count) = distribution.get_mut(&grade.letter) {
            *count += 1;
        }
    }
    distribution
}
