use std::cmp::min;

/// Cursor over a list whose contents live in the record store. The screens
/// only remember *where* the user is; the rows themselves are read fresh from
/// the store at draw time, so there is no snapshot to keep in sync after a
/// mutation. Callers pass the current list length with every movement.
#[derive(Default, Clone, Copy)]
pub(crate) struct ListCursor {
    pub(crate) selected: usize,
}

impl ListCursor {
    pub(crate) fn move_selection(&mut self, offset: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let max = (len - 1) as isize;
        let new = (self.selected as isize + offset).clamp(0, max);
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        self.selected = 0;
    }

    pub(crate) fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Pull the cursor back into range after the underlying list shrank.
    pub(crate) fn clamp_to(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else {
            self.selected = min(self.selected, len - 1);
        }
    }
}

/// Which pane of a two-pane screen owns the keyboard.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum PaneFocus {
    #[default]
    Left,
    Right,
}

impl PaneFocus {
    pub(crate) fn toggle(&mut self) {
        *self = match self {
            PaneFocus::Left => PaneFocus::Right,
            PaneFocus::Right => PaneFocus::Left,
        };
    }
}

/// State for the enrollment screen: pick a course on the left, then one of
/// the students not yet enrolled in it on the right. The right pane is driven
/// by the store's unenrolled-students query, so enrolling someone makes them
/// vanish from the options on the next draw.
#[derive(Default)]
pub(crate) struct EnrollScreen {
    pub(crate) focus: PaneFocus,
    pub(crate) courses: ListCursor,
    pub(crate) candidates: ListCursor,
}

impl EnrollScreen {
    /// Cursor for whichever pane currently has focus.
    pub(crate) fn active_cursor(&mut self) -> &mut ListCursor {
        match self.focus {
            PaneFocus::Left => &mut self.courses,
            PaneFocus::Right => &mut self.candidates,
        }
    }
}

/// State for the grade screen: pick a student on the left, one of their
/// enrolled courses on the right, then assign or overwrite the grade.
#[derive(Default)]
pub(crate) struct GradesScreen {
    pub(crate) focus: PaneFocus,
    pub(crate) students: ListCursor,
    pub(crate) courses: ListCursor,
}

impl GradesScreen {
    pub(crate) fn active_cursor(&mut self) -> &mut ListCursor {
        match self.focus {
            PaneFocus::Left => &mut self.students,
            PaneFocus::Right => &mut self.courses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut cursor = ListCursor::default();
        cursor.move_selection(-3, 5);
        assert_eq!(cursor.selected, 0);

        cursor.move_selection(10, 5);
        assert_eq!(cursor.selected, 4);

        cursor.move_selection(1, 0);
        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn cursor_recovers_after_list_shrinks() {
        let mut cursor = ListCursor::default();
        cursor.move_selection(4, 5);
        assert_eq!(cursor.selected, 4);

        cursor.clamp_to(2);
        assert_eq!(cursor.selected, 1);

        cursor.clamp_to(0);
        assert_eq!(cursor.selected, 0);
    }
}
