use crate::models::Course;

use super::{RecordStore, StoreError};

impl RecordStore {
    /// Add a course to the catalog. Codes are unique; a duplicate is rejected
    /// the same way duplicate student ids are. Courses are immutable once
    /// added, so there is no update counterpart.
    pub fn add_course(&mut self, course: Course) -> Result<(), StoreError> {
        if self.course_by_code(&course.code).is_some() {
            return Err(StoreError::DuplicateCourse(course.code));
        }
        self.courses.push(course);
        Ok(())
    }

    /// First course whose code matches, if any.
    pub fn course_by_code(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.code == code)
    }

    /// Every course in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courses_keep_insertion_order() {
        let mut store = RecordStore::new();
        store.add_course(Course::new("C2", "Compilers")).unwrap();
        store.add_course(Course::new("C1", "Algorithms")).unwrap();

        let codes: Vec<&str> = store.courses().iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["C2", "C1"]);
    }

    #[test]
    fn duplicate_code_is_rejected() {
        let mut store = RecordStore::new();
        store.add_course(Course::new("C1", "Algorithms")).unwrap();

        let err = store.add_course(Course::new("C1", "Algebra")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateCourse("C1".to_string()));
        assert_eq!(store.courses().len(), 1);
        assert_eq!(store.course_by_code("C1").unwrap().name, "Algorithms");
    }
}
