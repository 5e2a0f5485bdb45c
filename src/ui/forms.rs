use anyhow::{anyhow, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Course, Student};

/// Internal representation of the "student" form fields, shared by the add
/// and update flows.
#[derive(Default, Clone)]
pub(crate) struct StudentForm {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) active: StudentField,
    pub(crate) error: Option<String>,
}

/// Fields available within the student form.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum StudentField {
    #[default]
    Id,
    Name,
}

impl StudentForm {
    /// Populate the form from an existing student when editing.
    pub(crate) fn from_student(student: &Student) -> Self {
        Self {
            id: student.id.clone(),
            name: student.name.clone(),
            active: StudentField::Id,
            error: None,
        }
    }

    /// Swap focus between the id and name fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            StudentField::Id => StudentField::Name,
            StudentField::Name => StudentField::Id,
        };
    }

    /// Append a character to the active field, rejecting control characters.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            StudentField::Id => self.id.push(ch),
            StudentField::Name => self.name.push(ch),
        }
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            StudentField::Id => {
                self.id.pop();
            }
            StudentField::Name => {
                self.name.pop();
            }
        }
    }

    /// Validate the inputs and return a record ready for the store. Both
    /// fields are required; everything else is the store's concern.
    pub(crate) fn parse_inputs(&self) -> Result<Student> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(anyhow!("Student id is required."));
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Student name is required."));
        }
        Ok(Student::new(id, name))
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field_name: &str, field: StudentField) -> Line<'static> {
        let (value, is_active) = match field {
            StudentField::Id => (&self.id, self.active == StudentField::Id),
            StudentField::Name => (&self.name, self.active == StudentField::Name),
        };
        styled_form_line(field_name, value, is_active)
    }

    /// Return the character count for the requested field.
    pub(crate) fn value_len(&self, field: StudentField) -> usize {
        match field {
            StudentField::Id => self.id.chars().count(),
            StudentField::Name => self.name.chars().count(),
        }
    }
}

/// Form state for adding a course. Courses are immutable once added, so there
/// is no edit variant.
#[derive(Default, Clone)]
pub(crate) struct CourseForm {
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) active: CourseField,
    pub(crate) error: Option<String>,
}

/// Fields available within the course form.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum CourseField {
    #[default]
    Code,
    Name,
}

impl CourseForm {
    /// Swap focus between the code and name fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            CourseField::Code => CourseField::Name,
            CourseField::Name => CourseField::Code,
        };
    }

    /// Append a character to the active field, rejecting control characters.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            CourseField::Code => self.code.push(ch),
            CourseField::Name => self.name.push(ch),
        }
        true
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            CourseField::Code => {
                self.code.pop();
            }
            CourseField::Name => {
                self.name.pop();
            }
        }
    }

    /// Validate the inputs and return a record ready for the store.
    pub(crate) fn parse_inputs(&self) -> Result<Course> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err(anyhow!("Course code is required."));
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Course name is required."));
        }
        Ok(Course::new(code, name))
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field_name: &str, field: CourseField) -> Line<'static> {
        let (value, is_active) = match field {
            CourseField::Code => (&self.code, self.active == CourseField::Code),
            CourseField::Name => (&self.name, self.active == CourseField::Name),
        };
        styled_form_line(field_name, value, is_active)
    }

    /// Return the character count for the requested field.
    pub(crate) fn value_len(&self, field: CourseField) -> usize {
        match field {
            CourseField::Code => self.code.chars().count(),
            CourseField::Name => self.name.chars().count(),
        }
    }
}

/// Single-field form for assigning a grade to an already-chosen pair. The
/// student and course are carried by the surrounding mode, not the form.
#[derive(Default, Clone)]
pub(crate) struct GradeForm {
    pub(crate) grade: String,
    pub(crate) error: Option<String>,
}

impl GradeForm {
    /// Seed the field with the current grade so re-grading starts from what
    /// is on record.
    pub(crate) fn with_current(grade: Option<&str>) -> Self {
        Self {
            grade: grade.unwrap_or_default().to_string(),
            error: None,
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.grade.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.grade.pop();
    }

    /// Validate and return the trimmed grade text.
    pub(crate) fn parse_inputs(&self) -> Result<String> {
        let grade = self.grade.trim();
        if grade.is_empty() {
            return Err(anyhow!("Grade is required."));
        }
        Ok(grade.to_string())
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        styled_form_line("Grade", &self.grade, true)
    }

    pub(crate) fn value_len(&self) -> usize {
        self.grade.chars().count()
    }
}

/// Shared rendering for a `Label: value` form row. Active fields are
/// highlighted; empty ones show a ghosted placeholder.
fn styled_form_line(field_name: &str, value: &str, is_active: bool) -> Line<'static> {
    let display = if value.is_empty() {
        "<required>".to_string()
    } else {
        value.to_string()
    };

    let style = if is_active {
        Style::default().fg(Color::Yellow)
    } else if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(format!("{field_name}: ")),
        Span::styled(display, style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_form_requires_both_fields() {
        let mut form = StudentForm::default();
        assert!(form.parse_inputs().is_err());

        form.id = "  S1 ".to_string();
        assert!(form.parse_inputs().is_err());

        form.name = "Ada".to_string();
        let student = form.parse_inputs().unwrap();
        assert_eq!(student.id, "S1");
        assert_eq!(student.name, "Ada");
    }

    #[test]
    fn control_characters_are_rejected() {
        let mut form = CourseForm::default();
        assert!(!form.push_char('\u{8}'));
        assert!(form.push_char('C'));
        assert_eq!(form.code, "C");
    }

    #[test]
    fn grade_form_seeds_from_current_grade() {
        let form = GradeForm::with_current(Some("B+"));
        assert_eq!(form.grade, "B+");
        assert_eq!(form.parse_inputs().unwrap(), "B+");

        let empty = GradeForm::with_current(None);
        assert!(empty.parse_inputs().is_err());
    }
}
