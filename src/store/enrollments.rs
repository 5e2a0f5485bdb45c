use crate::models::{Course, Enrollment, Student};

use super::{RecordStore, StoreError};

impl RecordStore {
    /// Enroll a student in a course, creating the ungraded record that every
    /// grade and roster query keys off. Both sides of the pair must already
    /// exist, and enrolling the same pair twice is rejected so roster queries
    /// never see duplicate rows.
    pub fn enroll(&mut self, student_id: &str, course_code: &str) -> Result<(), StoreError> {
        if self.student_by_id(student_id).is_none() {
            return Err(StoreError::StudentNotFound(student_id.to_string()));
        }
        if self.course_by_code(course_code).is_none() {
            return Err(StoreError::CourseNotFound(course_code.to_string()));
        }
        if self.enrollment_for(student_id, course_code).is_some() {
            return Err(StoreError::AlreadyEnrolled {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            });
        }

        self.enrollments
            .push(Enrollment::new(student_id, course_code));
        Ok(())
    }

    /// Upsert a grade for a student-course pair. An existing record has its
    /// grade overwritten in place; otherwise a new record is appended already
    /// carrying the grade, which doubles as an enrollment. Assigning twice
    /// therefore never duplicates the pair.
    pub fn assign_grade(
        &mut self,
        student_id: &str,
        course_code: &str,
        grade: impl Into<String>,
    ) -> Result<(), StoreError> {
        if self.student_by_id(student_id).is_none() {
            return Err(StoreError::StudentNotFound(student_id.to_string()));
        }
        if self.course_by_code(course_code).is_none() {
            return Err(StoreError::CourseNotFound(course_code.to_string()));
        }

        let grade = Some(grade.into());
        match self
            .enrollments
            .iter_mut()
            .find(|e| e.student_id == student_id && e.course_code == course_code)
        {
            Some(enrollment) => enrollment.grade = grade,
            None => self.enrollments.push(Enrollment {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
                grade,
            }),
        }
        Ok(())
    }

    /// Grade for a pair, `None` when the pair has no record *or* the record
    /// is still ungraded. Callers treat both the same way, so the distinction
    /// is intentionally not observable.
    pub fn grade(&self, student_id: &str, course_code: &str) -> Option<&str> {
        self.enrollment_for(student_id, course_code)
            .and_then(|enrollment| enrollment.grade.as_deref())
    }

    /// Courses the student is enrolled in, in enrollment-record order, joined
    /// against the catalog by code. A code with no catalog entry is skipped.
    pub fn enrolled_courses(&self, student_id: &str) -> Vec<&Course> {
        self.enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .filter_map(|e| self.course_by_code(&e.course_code))
            .collect()
    }

    /// Students with no enrollment record naming the course. Drives the
    /// enrollment picker, so already-enrolled students never show up as
    /// options.
    pub fn unenrolled_students(&self, course_code: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|student| {
                !self
                    .enrollments
                    .iter()
                    .any(|e| e.student_id == student.id && e.course_code == course_code)
            })
            .collect()
    }

    /// All enrollment records for one student, insertion order preserved.
    pub fn grades_for_student(&self, student_id: &str) -> Vec<&Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .collect()
    }

    /// All enrollment records for one course, insertion order preserved.
    pub fn grades_for_course(&self, course_code: &str) -> Vec<&Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| e.course_code == course_code)
            .collect()
    }

    fn enrollment_for(&self, student_id: &str, course_code: &str) -> Option<&Enrollment> {
        self.enrollments
            .iter()
            .find(|e| e.student_id == student_id && e.course_code == course_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.add_student(Student::new("S1", "Ada")).unwrap();
        store.add_student(Student::new("S2", "Alan")).unwrap();
        store.add_course(Course::new("C1", "Algorithms")).unwrap();
        store.add_course(Course::new("C2", "Compilers")).unwrap();
        store
    }

    #[test]
    fn enroll_creates_ungraded_record() {
        let mut store = seeded_store();
        store.enroll("S1", "C1").unwrap();

        assert_eq!(store.grade("S1", "C1"), None);
        assert_eq!(store.grades_for_student("S1").len(), 1);
        assert_eq!(store.grades_for_student("S1")[0].grade_label(), "ungraded");
    }

    #[test]
    fn enroll_requires_both_keys() {
        let mut store = seeded_store();

        assert_eq!(
            store.enroll("S9", "C1").unwrap_err(),
            StoreError::StudentNotFound("S9".to_string())
        );
        assert_eq!(
            store.enroll("S1", "C9").unwrap_err(),
            StoreError::CourseNotFound("C9".to_string())
        );
        assert!(store.grades_for_student("S1").is_empty());
    }

    #[test]
    fn double_enroll_is_rejected() {
        let mut store = seeded_store();
        store.enroll("S1", "C1").unwrap();

        let err = store.enroll("S1", "C1").unwrap_err();
        assert_eq!(
            err,
            StoreError::AlreadyEnrolled {
                student_id: "S1".to_string(),
                course_code: "C1".to_string(),
            }
        );
        assert_eq!(store.enrolled_courses("S1").len(), 1);
    }

    #[test]
    fn assign_grade_overwrites_instead_of_duplicating() {
        let mut store = seeded_store();
        store.enroll("S1", "C1").unwrap();
        store.assign_grade("S1", "C1", "B").unwrap();
        store.assign_grade("S1", "C1", "A").unwrap();

        assert_eq!(store.grade("S1", "C1"), Some("A"));
        assert_eq!(store.grades_for_student("S1").len(), 1);
        assert_eq!(store.enrolled_courses("S1").len(), 1);
    }

    #[test]
    fn assign_grade_without_prior_enrollment_enrolls() {
        let mut store = seeded_store();
        store.assign_grade("S2", "C2", "A-").unwrap();

        assert_eq!(store.grade("S2", "C2"), Some("A-"));
        let courses: Vec<&str> = store
            .enrolled_courses("S2")
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(courses, vec!["C2"]);
    }

    #[test]
    fn enrolled_courses_follow_enrollment_order() {
        let mut store = seeded_store();
        store.enroll("S1", "C2").unwrap();
        store.enroll("S1", "C1").unwrap();

        let codes: Vec<&str> = store
            .enrolled_courses("S1")
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(codes, vec!["C2", "C1"]);
    }

    #[test]
    fn unenrolled_students_excludes_exactly_the_enrolled() {
        let mut store = seeded_store();
        store.enroll("S1", "C1").unwrap();

        let remaining: Vec<&str> = store
            .unenrolled_students("C1")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(remaining, vec!["S2"]);

        // Nobody is enrolled in C2 yet, so everyone is a candidate.
        assert_eq!(store.unenrolled_students("C2").len(), 2);
    }

    #[test]
    fn grades_for_course_filters_by_code() {
        let mut store = seeded_store();
        store.assign_grade("S1", "C1", "A").unwrap();
        store.assign_grade("S2", "C1", "C").unwrap();
        store.assign_grade("S1", "C2", "B").unwrap();

        let students: Vec<&str> = store
            .grades_for_course("C1")
            .iter()
            .map(|e| e.student_id.as_str())
            .collect();
        assert_eq!(students, vec!["S1", "S2"]);
    }

    #[test]
    fn worked_example_from_the_ground_up() {
        let mut store = RecordStore::new();
        store.add_student(Student::new("S1", "Ada")).unwrap();
        store.add_course(Course::new("C1", "Algorithms")).unwrap();
        store.enroll("S1", "C1").unwrap();
        store.assign_grade("S1", "C1", "A+").unwrap();

        assert_eq!(store.grade("S1", "C1"), Some("A+"));
        assert_eq!(
            store.enrolled_courses("S1"),
            vec![&Course::new("C1", "Algorithms")]
        );
        assert!(store.unenrolled_students("C1").is_empty());
    }
}
