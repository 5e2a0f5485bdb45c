use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::store::RecordStore;

use super::forms::{CourseField, CourseForm, GradeForm, StudentField, StudentForm};
use super::helpers::{centered_rect, selectable_lines, surface_error};
use super::screens::{EnrollScreen, GradesScreen, ListCursor, PaneFocus};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height allocation for the grade table beneath the selection panes.
const GRADE_TABLE_HEIGHT: u16 = 8;

/// High-level navigation states. Keeping this explicit makes it easy to
/// reason about which rendering path runs and what keyboard shortcuts should
/// do. Each screen maps onto one panel of the original desktop layout.
enum Screen {
    Students(ListCursor),
    Courses(ListCursor),
    Enroll(EnrollScreen),
    Grades(GradesScreen),
}

/// Fine-grained modes scoped to the current screen. Forms and detail popups
/// live here so the screen underneath keeps its selection state while the
/// modal is open.
enum Mode {
    Normal,
    AddingStudent(StudentForm),
    EditingStudent { old_id: String, form: StudentForm },
    AddingCourse(CourseForm),
    AssigningGrade {
        student_id: String,
        course_code: String,
        form: GradeForm,
    },
    ViewingStudent(String),
    ViewingCourse(String),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. The record store is owned
/// here and passed nowhere else; every event handler reads and mutates it
/// through its public API.
pub struct App {
    store: RecordStore,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            screen: Screen::Students(ListCursor::default()),
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Dispatch one key press. Returns `true` when the application should
    /// exit. The mode is temporarily moved out so handlers can consume the
    /// form they were given and decide what mode comes next.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingStudent(form) => self.handle_add_student(code, form)?,
            Mode::EditingStudent { old_id, form } => {
                self.handle_edit_student(code, old_id, form)?
            }
            Mode::AddingCourse(form) => self.handle_add_course(code, form)?,
            Mode::AssigningGrade {
                student_id,
                course_code,
                form,
            } => self.handle_assign_grade(code, student_id, course_code, form)?,
            Mode::ViewingStudent(id) => Self::handle_detail_key(code, Mode::ViewingStudent(id)),
            Mode::ViewingCourse(code_) => {
                Self::handle_detail_key(code, Mode::ViewingCourse(code_))
            }
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        // Keys shared by every screen in normal mode.
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
                return Ok(Mode::Normal);
            }
            KeyCode::Char('1') => {
                self.clear_status();
                self.screen = Screen::Students(ListCursor::default());
                return Ok(Mode::Normal);
            }
            KeyCode::Char('2') => {
                self.clear_status();
                self.screen = Screen::Courses(ListCursor::default());
                return Ok(Mode::Normal);
            }
            KeyCode::Char('3') => {
                self.clear_status();
                self.screen = Screen::Enroll(EnrollScreen::default());
                return Ok(Mode::Normal);
            }
            KeyCode::Char('4') => {
                self.clear_status();
                self.screen = Screen::Grades(GradesScreen::default());
                return Ok(Mode::Normal);
            }
            _ => {}
        }

        let mut status_to_set: Option<(String, StatusKind)> = None;
        let mut next_mode = Mode::Normal;

        match self.screen {
            Screen::Students(ref mut cursor) => {
                let len = self.store.students().len();
                match code {
                    KeyCode::Up => cursor.move_selection(-1, len),
                    KeyCode::Down => cursor.move_selection(1, len),
                    KeyCode::PageUp => cursor.move_selection(-5, len),
                    KeyCode::PageDown => cursor.move_selection(5, len),
                    KeyCode::Home => cursor.select_first(),
                    KeyCode::End => cursor.select_last(len),
                    KeyCode::Char('+') => {
                        next_mode = Mode::AddingStudent(StudentForm::default());
                    }
                    KeyCode::Char('e') | KeyCode::Char('E') => {
                        if let Some(student) = self.store.students().get(cursor.selected) {
                            next_mode = Mode::EditingStudent {
                                old_id: student.id.clone(),
                                form: StudentForm::from_student(student),
                            };
                        } else {
                            status_to_set = Some((
                                "No student selected to edit.".to_string(),
                                StatusKind::Error,
                            ));
                        }
                    }
                    KeyCode::Enter => {
                        if let Some(student) = self.store.students().get(cursor.selected) {
                            next_mode = Mode::ViewingStudent(student.id.clone());
                        } else {
                            status_to_set =
                                Some(("No student selected.".to_string(), StatusKind::Error));
                        }
                    }
                    _ => {}
                }
            }
            Screen::Courses(ref mut cursor) => {
                let len = self.store.courses().len();
                match code {
                    KeyCode::Up => cursor.move_selection(-1, len),
                    KeyCode::Down => cursor.move_selection(1, len),
                    KeyCode::PageUp => cursor.move_selection(-5, len),
                    KeyCode::PageDown => cursor.move_selection(5, len),
                    KeyCode::Home => cursor.select_first(),
                    KeyCode::End => cursor.select_last(len),
                    KeyCode::Char('+') => {
                        next_mode = Mode::AddingCourse(CourseForm::default());
                    }
                    KeyCode::Enter => {
                        if let Some(course) = self.store.courses().get(cursor.selected) {
                            next_mode = Mode::ViewingCourse(course.code.clone());
                        } else {
                            status_to_set =
                                Some(("No course selected.".to_string(), StatusKind::Error));
                        }
                    }
                    _ => {}
                }
            }
            Screen::Enroll(ref mut enroll) => match code {
                KeyCode::Tab | KeyCode::BackTab => enroll.focus.toggle(),
                KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                    let offset: isize = match code {
                        KeyCode::Up => -1,
                        KeyCode::Down => 1,
                        KeyCode::PageUp => -5,
                        _ => 5,
                    };
                    let selected_code = self
                        .store
                        .courses()
                        .get(enroll.courses.selected)
                        .map(|c| c.code.clone());
                    let len = match enroll.focus {
                        PaneFocus::Left => self.store.courses().len(),
                        PaneFocus::Right => selected_code
                            .as_deref()
                            .map(|c| self.store.unenrolled_students(c).len())
                            .unwrap_or(0),
                    };
                    enroll.active_cursor().move_selection(offset, len);
                    // Picking a different course invalidates the candidate
                    // selection on the right.
                    if enroll.focus == PaneFocus::Left {
                        enroll.candidates.select_first();
                    }
                }
                KeyCode::Enter => {
                    let selected_code = self
                        .store
                        .courses()
                        .get(enroll.courses.selected)
                        .map(|c| c.code.clone());
                    match selected_code {
                        Some(course_code) => {
                            let candidate = self
                                .store
                                .unenrolled_students(&course_code)
                                .get(enroll.candidates.selected)
                                .map(|s| (s.id.clone(), s.name.clone()));
                            match candidate {
                                Some((student_id, name)) => {
                                    match self.store.enroll(&student_id, &course_code) {
                                        Ok(()) => {
                                            let remaining =
                                                self.store.unenrolled_students(&course_code).len();
                                            enroll.candidates.clamp_to(remaining);
                                            status_to_set = Some((
                                                format!("Enrolled {name} in {course_code}."),
                                                StatusKind::Info,
                                            ));
                                        }
                                        Err(err) => {
                                            status_to_set =
                                                Some((err.to_string(), StatusKind::Error));
                                        }
                                    }
                                }
                                None => {
                                    status_to_set = Some((
                                        "No student available to enroll.".to_string(),
                                        StatusKind::Error,
                                    ));
                                }
                            }
                        }
                        None => {
                            status_to_set =
                                Some(("No course selected.".to_string(), StatusKind::Error));
                        }
                    }
                }
                _ => {}
            },
            Screen::Grades(ref mut grades) => match code {
                KeyCode::Tab | KeyCode::BackTab => grades.focus.toggle(),
                KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                    let offset: isize = match code {
                        KeyCode::Up => -1,
                        KeyCode::Down => 1,
                        KeyCode::PageUp => -5,
                        _ => 5,
                    };
                    let selected_id = self
                        .store
                        .students()
                        .get(grades.students.selected)
                        .map(|s| s.id.clone());
                    let len = match grades.focus {
                        PaneFocus::Left => self.store.students().len(),
                        PaneFocus::Right => selected_id
                            .as_deref()
                            .map(|id| self.store.enrolled_courses(id).len())
                            .unwrap_or(0),
                    };
                    grades.active_cursor().move_selection(offset, len);
                    if grades.focus == PaneFocus::Left {
                        grades.courses.select_first();
                    }
                }
                KeyCode::Enter => {
                    let selected_id = self
                        .store
                        .students()
                        .get(grades.students.selected)
                        .map(|s| s.id.clone());
                    match selected_id {
                        Some(student_id) => {
                            let course_code = self
                                .store
                                .enrolled_courses(&student_id)
                                .get(grades.courses.selected)
                                .map(|c| c.code.clone());
                            match course_code {
                                Some(course_code) => {
                                    let form = GradeForm::with_current(
                                        self.store.grade(&student_id, &course_code),
                                    );
                                    next_mode = Mode::AssigningGrade {
                                        student_id,
                                        course_code,
                                        form,
                                    };
                                }
                                None => {
                                    status_to_set = Some((
                                        "Student has no enrolled course selected.".to_string(),
                                        StatusKind::Error,
                                    ));
                                }
                            }
                        }
                        None => {
                            status_to_set =
                                Some(("No student selected.".to_string(), StatusKind::Error));
                        }
                    }
                }
                _ => {}
            },
        }

        if let Some((text, kind)) = status_to_set {
            self.set_status(text, kind);
        } else if !matches!(next_mode, Mode::Normal) {
            self.clear_status();
        }

        Ok(next_mode)
    }

    fn handle_add_student(&mut self, code: KeyCode, mut form: StudentForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add student cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_inputs() {
                Ok(student) => {
                    let label = student.to_string();
                    match self.store.add_student(student) {
                        Ok(()) => {
                            self.set_status(format!("Added {label}."), StatusKind::Info);
                            keep_open = false;
                        }
                        Err(err) => {
                            let message = err.to_string();
                            form.error = Some(message.clone());
                            self.set_status(message, StatusKind::Error);
                        }
                    }
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingStudent(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_edit_student(
        &mut self,
        code: KeyCode,
        old_id: String,
        mut form: StudentForm,
    ) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Edit cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_inputs() {
                Ok(student) => match self.store.update_student(&old_id, student) {
                    Ok(()) => {
                        self.set_status("Student updated.", StatusKind::Info);
                        keep_open = false;
                    }
                    Err(err) => {
                        let message = err.to_string();
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                },
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::EditingStudent { old_id, form })
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_add_course(&mut self, code: KeyCode, mut form: CourseForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add course cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_inputs() {
                Ok(course) => {
                    let label = course.to_string();
                    match self.store.add_course(course) {
                        Ok(()) => {
                            self.set_status(format!("Added {label}."), StatusKind::Info);
                            keep_open = false;
                        }
                        Err(err) => {
                            let message = err.to_string();
                            form.error = Some(message.clone());
                            self.set_status(message, StatusKind::Error);
                        }
                    }
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingCourse(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn handle_assign_grade(
        &mut self,
        code: KeyCode,
        student_id: String,
        course_code: String,
        mut form: GradeForm,
    ) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Grade assignment cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_inputs() {
                Ok(grade) => match self.store.assign_grade(&student_id, &course_code, grade) {
                    Ok(()) => {
                        self.set_status(
                            format!("Grade recorded for {course_code}."),
                            StatusKind::Info,
                        );
                        keep_open = false;
                    }
                    Err(err) => {
                        let message = err.to_string();
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                },
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AssigningGrade {
                student_id,
                course_code,
                form,
            })
        } else {
            Ok(Mode::Normal)
        }
    }

    /// Detail popups are read-only; Esc, Enter, or `q` dismisses them and
    /// everything else keeps them open.
    fn handle_detail_key(code: KeyCode, current: Mode) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Mode::Normal,
            _ => current,
        }
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Students(cursor) => self.draw_students(frame, content_area, cursor),
            Screen::Courses(cursor) => self.draw_courses(frame, content_area, cursor),
            Screen::Enroll(enroll) => self.draw_enroll(frame, content_area, enroll),
            Screen::Grades(grades) => self.draw_grades(frame, content_area, grades),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingStudent(form) => {
                self.draw_student_form(frame, area, "Add Student", form)
            }
            Mode::EditingStudent { form, .. } => {
                self.draw_student_form(frame, area, "Update Student", form)
            }
            Mode::AddingCourse(form) => self.draw_course_form(frame, area, form),
            Mode::AssigningGrade {
                student_id,
                course_code,
                form,
            } => self.draw_grade_form(frame, area, student_id, course_code, form),
            Mode::ViewingStudent(id) => self.draw_student_details(frame, area, id),
            Mode::ViewingCourse(code) => self.draw_course_details(frame, area, code),
            Mode::Normal => {}
        }
    }

    fn draw_students(&self, frame: &mut Frame, area: Rect, cursor: &ListCursor) {
        let block = Block::default().borders(Borders::ALL).title("Students");
        if self.store.students().is_empty() {
            let message = Paragraph::new("No students yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let rows: Vec<String> = self
            .store
            .students()
            .iter()
            .map(|student| student.to_string())
            .collect();
        let lines = selectable_lines(&rows, cursor.selected, true);
        let list = Paragraph::new(lines).block(block);
        frame.render_widget(list, area);
    }

    fn draw_courses(&self, frame: &mut Frame, area: Rect, cursor: &ListCursor) {
        let block = Block::default().borders(Borders::ALL).title("Courses");
        if self.store.courses().is_empty() {
            let message = Paragraph::new("No courses yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let rows: Vec<String> = self
            .store
            .courses()
            .iter()
            .map(|course| course.to_string())
            .collect();
        let lines = selectable_lines(&rows, cursor.selected, true);
        let list = Paragraph::new(lines).block(block);
        frame.render_widget(list, area);
    }

    fn draw_enroll(&self, frame: &mut Frame, area: Rect, enroll: &EnrollScreen) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let course_rows: Vec<String> = self
            .store
            .courses()
            .iter()
            .map(|course| course.to_string())
            .collect();
        let left_focused = enroll.focus == PaneFocus::Left;
        let left_block = pane_block("Courses", left_focused);
        if course_rows.is_empty() {
            let message = Paragraph::new("No courses yet. Add one on the Courses screen.")
                .alignment(Alignment::Center)
                .block(left_block);
            frame.render_widget(message, panes[0]);
        } else {
            let lines = selectable_lines(&course_rows, enroll.courses.selected, left_focused);
            frame.render_widget(Paragraph::new(lines).block(left_block), panes[0]);
        }

        let right_block = pane_block("Not Yet Enrolled", !left_focused);
        let candidate_rows: Vec<String> = self
            .store
            .courses()
            .get(enroll.courses.selected)
            .map(|course| {
                self.store
                    .unenrolled_students(&course.code)
                    .iter()
                    .map(|student| student.to_string())
                    .collect()
            })
            .unwrap_or_default();
        if candidate_rows.is_empty() {
            let text = if course_rows.is_empty() {
                "Select a course first."
            } else {
                "Every student is already enrolled."
            };
            let message = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(right_block);
            frame.render_widget(message, panes[1]);
        } else {
            let lines =
                selectable_lines(&candidate_rows, enroll.candidates.selected, !left_focused);
            frame.render_widget(Paragraph::new(lines).block(right_block), panes[1]);
        }
    }

    fn draw_grades(&self, frame: &mut Frame, area: Rect, grades: &GradesScreen) {
        let table_height = GRADE_TABLE_HEIGHT.min(area.height / 2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(table_height)])
            .split(area);
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        let selected_student = self.store.students().get(grades.students.selected);

        let student_rows: Vec<String> = self
            .store
            .students()
            .iter()
            .map(|student| student.to_string())
            .collect();
        let left_focused = grades.focus == PaneFocus::Left;
        let left_block = pane_block("Students", left_focused);
        if student_rows.is_empty() {
            let message = Paragraph::new("No students yet. Add one on the Students screen.")
                .alignment(Alignment::Center)
                .block(left_block);
            frame.render_widget(message, panes[0]);
        } else {
            let lines = selectable_lines(&student_rows, grades.students.selected, left_focused);
            frame.render_widget(Paragraph::new(lines).block(left_block), panes[0]);
        }

        let right_block = pane_block("Enrolled Courses", !left_focused);
        let course_rows: Vec<String> = selected_student
            .map(|student| {
                self.store
                    .enrolled_courses(&student.id)
                    .iter()
                    .map(|course| course.to_string())
                    .collect()
            })
            .unwrap_or_default();
        if course_rows.is_empty() {
            let message = Paragraph::new("No enrollments for this student.")
                .alignment(Alignment::Center)
                .block(right_block);
            frame.render_widget(message, panes[1]);
        } else {
            let lines = selectable_lines(&course_rows, grades.courses.selected, !left_focused);
            frame.render_widget(Paragraph::new(lines).block(right_block), panes[1]);
        }

        // Grade table for the selected student, mirroring the original's
        // per-student grade view.
        let table_block = Block::default().borders(Borders::ALL).title("Grades");
        let grade_lines: Vec<Line> = selected_student
            .map(|student| {
                self.store
                    .grades_for_student(&student.id)
                    .iter()
                    .map(|enrollment| {
                        Line::from(vec![
                            Span::styled(
                                format!("{:<10}", enrollment.course_code),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(enrollment.grade_label().to_string()),
                        ])
                    })
                    .collect()
            })
            .unwrap_or_default();
        if grade_lines.is_empty() {
            let message = Paragraph::new("No grades recorded.")
                .alignment(Alignment::Center)
                .block(table_block);
            frame.render_widget(message, chunks[1]);
        } else {
            frame.render_widget(Paragraph::new(grade_lines).block(table_block), chunks[1]);
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::AddingStudent(_))
            | (_, Mode::EditingStudent { .. })
            | (_, Mode::AddingCourse(_)) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch Field   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (_, Mode::AssigningGrade { .. }) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (_, Mode::ViewingStudent(_)) | (_, Mode::ViewingCourse(_)) => Line::from(vec![
                Span::styled("[Esc]", key_style),
                Span::raw(" Close"),
            ]),
            (Screen::Students(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Details   "),
                Span::styled("[+]", key_style),
                Span::raw(" Add   "),
                Span::styled("[e]", key_style),
                Span::raw(" Edit   "),
                Span::styled("[1-4]", key_style),
                Span::raw(" Screens   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Courses(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Details   "),
                Span::styled("[+]", key_style),
                Span::raw(" Add   "),
                Span::styled("[1-4]", key_style),
                Span::raw(" Screens   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Enroll(_), _) => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch Pane   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Enroll   "),
                Span::styled("[1-4]", key_style),
                Span::raw(" Screens   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Grades(_), _) => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch Pane   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Assign Grade   "),
                Span::styled("[1-4]", key_style),
                Span::raw(" Screens   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn draw_student_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &StudentForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let id_line = form.build_line("Id", StudentField::Id);
        let name_line = form.build_line("Name", StudentField::Name);

        let mut lines = vec![id_line, name_line, Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save, Tab to switch, Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (cursor_x, cursor_y) = match form.active {
            StudentField::Id => {
                let prefix = "Id: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(StudentField::Id) as u16,
                    inner.y,
                )
            }
            StudentField::Name => {
                let prefix = "Name: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(StudentField::Name) as u16,
                    inner.y + 1,
                )
            }
        };
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_course_form(&self, frame: &mut Frame, area: Rect, form: &CourseForm) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Add Course").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let code_line = form.build_line("Code", CourseField::Code);
        let name_line = form.build_line("Name", CourseField::Name);

        let mut lines = vec![code_line, name_line, Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save, Tab to switch, Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (cursor_x, cursor_y) = match form.active {
            CourseField::Code => {
                let prefix = "Code: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(CourseField::Code) as u16,
                    inner.y,
                )
            }
            CourseField::Name => {
                let prefix = "Name: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(CourseField::Name) as u16,
                    inner.y + 1,
                )
            }
        };
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_grade_form(
        &self,
        frame: &mut Frame,
        area: Rect,
        student_id: &str,
        course_code: &str,
        form: &GradeForm,
    ) {
        let popup_area = centered_rect(60, 40, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Assign Grade").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let student_label = self
            .store
            .student_by_id(student_id)
            .map(|student| student.to_string())
            .unwrap_or_else(|| student_id.to_string());
        let course_label = self
            .store
            .course_by_code(course_code)
            .map(|course| course.to_string())
            .unwrap_or_else(|| course_code.to_string());

        let mut lines = vec![
            Line::from(format!("Student: {student_label}")),
            Line::from(format!("Course: {course_label}")),
            form.build_line(),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save, Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let prefix = "Grade: ".len() as u16;
        frame.set_cursor_position((inner.x + prefix + form.value_len() as u16, inner.y + 2));
    }

    fn draw_student_details(&self, frame: &mut Frame, area: Rect, student_id: &str) {
        let popup_area = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Student Details")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = Vec::new();
        match self.store.student_by_id(student_id) {
            Some(student) => {
                lines.push(Line::from(Span::styled(
                    student.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));

                let enrollments = self.store.grades_for_student(student_id);
                if enrollments.is_empty() {
                    lines.push(Line::from("Not enrolled in any course."));
                } else {
                    for enrollment in enrollments {
                        let course_name = self
                            .store
                            .course_by_code(&enrollment.course_code)
                            .map(|course| course.name.as_str())
                            .unwrap_or("(unknown course)");
                        lines.push(Line::from(format!(
                            "{:<10} {:<24} {}",
                            enrollment.course_code,
                            course_name,
                            enrollment.grade_label()
                        )));
                    }
                }
            }
            None => lines.push(Line::from("Student no longer exists.")),
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }

    fn draw_course_details(&self, frame: &mut Frame, area: Rect, course_code: &str) {
        let popup_area = centered_rect(60, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Course Details")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines = Vec::new();
        match self.store.course_by_code(course_code) {
            Some(course) => {
                lines.push(Line::from(Span::styled(
                    course.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));

                let enrollments = self.store.grades_for_course(course_code);
                if enrollments.is_empty() {
                    lines.push(Line::from("No students enrolled."));
                } else {
                    for enrollment in enrollments {
                        let student_name = self
                            .store
                            .student_by_id(&enrollment.student_id)
                            .map(|student| student.name.as_str())
                            .unwrap_or("(unknown student)");
                        lines.push(Line::from(format!(
                            "{:<10} {:<24} {}",
                            enrollment.student_id,
                            student_name,
                            enrollment.grade_label()
                        )));
                    }
                }

                let waiting = self.store.unenrolled_students(course_code);
                if !waiting.is_empty() {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        "Not yet enrolled:",
                        Style::default().add_modifier(Modifier::BOLD),
                    )));
                    for student in waiting {
                        lines.push(Line::from(format!("  {student}")));
                    }
                }
            }
            None => lines.push(Line::from("Course no longer exists.")),
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, inner);
    }
}

/// Bordered block for a selection pane, highlighted when it has focus.
fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let mut block = Block::default().borders(Borders::ALL).title(title);
    if focused {
        block = block.style(Style::default().fg(Color::Yellow));
    }
    block
}
