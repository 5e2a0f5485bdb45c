use crate::models::Student;

use super::{RecordStore, StoreError};

impl RecordStore {
    /// Register a new student. The id is a hard unique key: a second record
    /// with the same id is rejected rather than appended, so every other
    /// operation can treat "first match" and "only match" as the same thing.
    pub fn add_student(&mut self, student: Student) -> Result<(), StoreError> {
        if self.student_by_id(&student.id).is_some() {
            return Err(StoreError::DuplicateStudent(student.id));
        }
        self.students.push(student);
        Ok(())
    }

    /// Replace the record currently holding `old_id` with `new_student`,
    /// keeping its position so the list order the user sees is stable.
    ///
    /// Renaming onto an id that a *different* record already holds is
    /// rejected; re-saving a student under its own id is fine. When the id
    /// changes, enrollment records pointing at `old_id` are re-keyed so the
    /// student keeps their courses and grades.
    pub fn update_student(&mut self, old_id: &str, new_student: Student) -> Result<(), StoreError> {
        if new_student.id != old_id && self.student_by_id(&new_student.id).is_some() {
            return Err(StoreError::DuplicateStudent(new_student.id));
        }

        let position = self
            .students
            .iter()
            .position(|student| student.id == old_id)
            .ok_or_else(|| StoreError::StudentNotFound(old_id.to_string()))?;

        if new_student.id != old_id {
            for enrollment in &mut self.enrollments {
                if enrollment.student_id == old_id {
                    enrollment.student_id = new_student.id.clone();
                }
            }
        }

        self.students[position] = new_student;
        Ok(())
    }

    /// First student whose id matches, if any.
    pub fn student_by_id(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }

    /// Every student in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, name: &str) -> Student {
        Student::new(id, name)
    }

    #[test]
    fn students_keep_insertion_order() {
        let mut store = RecordStore::new();
        store.add_student(sample("S3", "Grace")).unwrap();
        store.add_student(sample("S1", "Ada")).unwrap();
        store.add_student(sample("S2", "Alan")).unwrap();

        let ids: Vec<&str> = store.students().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S3", "S1", "S2"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut store = RecordStore::new();
        store.add_student(sample("S1", "Ada")).unwrap();

        let err = store.add_student(sample("S1", "Alan")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateStudent("S1".to_string()));
        assert_eq!(store.students().len(), 1);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = RecordStore::new();
        store.add_student(sample("S1", "Ada")).unwrap();
        store.add_student(sample("S2", "Alan")).unwrap();

        store
            .update_student("S1", sample("S9", "Ada Lovelace"))
            .unwrap();

        assert!(store.student_by_id("S1").is_none());
        let updated = store.student_by_id("S9").unwrap();
        assert_eq!(updated.name, "Ada Lovelace");
        // Position is preserved, not moved to the end.
        assert_eq!(store.students()[0].id, "S9");
    }

    #[test]
    fn update_rekeys_enrollments() {
        let mut store = RecordStore::new();
        store.add_student(sample("S1", "Ada")).unwrap();
        store
            .add_course(crate::models::Course::new("C1", "Algorithms"))
            .unwrap();
        store.enroll("S1", "C1").unwrap();

        store.update_student("S1", sample("S9", "Ada")).unwrap();

        assert_eq!(store.enrolled_courses("S9").len(), 1);
        assert!(store.enrolled_courses("S1").is_empty());
    }

    #[test]
    fn update_unknown_id_leaves_collection_unchanged() {
        let mut store = RecordStore::new();
        store.add_student(sample("S1", "Ada")).unwrap();

        let err = store
            .update_student("S7", sample("S8", "Nobody"))
            .unwrap_err();
        assert_eq!(err, StoreError::StudentNotFound("S7".to_string()));
        assert_eq!(store.students(), &[sample("S1", "Ada")]);
    }

    #[test]
    fn update_cannot_steal_another_students_id() {
        let mut store = RecordStore::new();
        store.add_student(sample("S1", "Ada")).unwrap();
        store.add_student(sample("S2", "Alan")).unwrap();

        let err = store.update_student("S2", sample("S1", "Alan")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateStudent("S1".to_string()));

        // Re-saving under the same id is allowed.
        store.update_student("S2", sample("S2", "Alan T.")).unwrap();
        assert_eq!(store.student_by_id("S2").unwrap().name, "Alan T.");
    }
}
