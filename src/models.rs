//! Domain models shared between the record store and the TUI. The intent is
//! that these types stay light-weight data holders so other layers can focus
//! on presentation and query logic. Keeping the commentary here means later
//! refactors can reconstruct the assumptions even if other context is lost.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A student known to the system. The `id` is the unique key every other
/// record refers to; enrollment rows carry it rather than an index so the
/// student list can be edited without breaking references.
pub struct Student {
    /// Unique identifier assigned by whoever registers the student. The store
    /// enforces uniqueness, so edit flows bubble the *old* id back alongside
    /// the replacement record.
    pub id: String,
    /// Display name shown in lists and selection panes.
    pub name: String,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Student {
    /// Render as `name (id)` so selection panes show both the friendly name
    /// and the key the store actually matches on.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A course students can enroll in. Immutable once added; the `code` is the
/// unique key enrollment rows join against.
pub struct Course {
    /// Unique course code, e.g. `CS101`.
    pub code: String,
    /// User-facing course name.
    pub name: String,
}

impl Course {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One student-course relationship. The record doubles as the grade slot:
/// enrolling creates it with `grade = None`, and grade assignment fills or
/// overwrites it in place. Its existence is the sole evidence that the
/// student is enrolled in the course.
pub struct Enrollment {
    pub student_id: String,
    pub course_code: String,
    /// `None` until a grade is assigned. An ungraded enrollment and a missing
    /// record are deliberately indistinguishable to callers asking for the
    /// grade of a pair.
    pub grade: Option<String>,
}

impl Enrollment {
    /// Fresh enrollment with no grade yet.
    pub fn new(student_id: impl Into<String>, course_code: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            course_code: course_code.into(),
            grade: None,
        }
    }

    /// Text shown in grade tables. Views rely on this ready-to-use formatting
    /// instead of matching on the option themselves.
    pub fn grade_label(&self) -> &str {
        match &self.grade {
            Some(grade) => grade.as_str(),
            None => "ungraded",
        }
    }
}
