//! The in-memory record store. Every function in the submodules encapsulates
//! one mutation or query over the three owned collections so the rest of the
//! codebase can stay focused on UI state management. Capturing the rationale
//! in comments keeps the intent of each scan easy to rediscover when
//! returning to the project.

mod courses;
mod enrollments;
mod students;

use thiserror::Error;

use crate::models::{Course, Enrollment, Student};

/// Failure modes surfaced by store mutations. Queries never fail; they
/// degrade to empty results instead. The messages are written to be shown
/// verbatim in the UI footer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Student id {0} already exists.")]
    DuplicateStudent(String),
    #[error("Student {0} not found.")]
    StudentNotFound(String),
    #[error("Course code {0} already exists.")]
    DuplicateCourse(String),
    #[error("Course {0} not found.")]
    CourseNotFound(String),
    #[error("Student {student_id} is already enrolled in {course_code}.")]
    AlreadyEnrolled {
        student_id: String,
        course_code: String,
    },
}

/// Owner of all student, course, and enrollment records. Exactly one instance
/// exists per running application and it is passed explicitly to whatever
/// layer needs it; nothing else mutates the collections.
///
/// All collections are plain vectors scanned linearly. The data set is a few
/// hundred records at most, so insertion order doubles as the display order
/// and no secondary indexes are kept.
#[derive(Debug, Default)]
pub struct RecordStore {
    students: Vec<Student>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
}

impl RecordStore {
    /// Create an empty store. All data is transient and lost on exit.
    pub fn new() -> Self {
        Self::default()
    }
}
