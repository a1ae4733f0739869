//! UTF-8 safe draft buffer with cursor management.
//!
//! Holds the not-yet-committed text of the tag input field. The controller
//! drains it with [`DraftState::take`] on every commit attempt; everything
//! else here is plain single-line editing.

use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default)]
pub struct DraftState {
    /// The underlying text buffer
    text: String,
    /// Cursor byte index into `text` (always on a UTF-8 boundary)
    cursor: usize,
}

impl DraftState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Terminal column of the cursor, measured in display cells.
    pub fn display_column(&self) -> u16 {
        self.text[..self.cursor].width() as u16
    }

    pub fn set_text<S: Into<String>>(&mut self, s: S) {
        self.text = s.into();
        self.cursor = self.text.len();
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.text.len());
    }

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.text[..self.cursor].chars().last().map(|c| c.len_utf8()).unwrap_or(1);
        self.cursor = self.cursor.saturating_sub(prev);
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor = self.cursor.saturating_add(next.len_utf8());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.text[..self.cursor].chars().last().map(|c| c.len_utf8()).unwrap_or(1);
        let start = self.cursor - prev;
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Delete the char at the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let next = self.text[self.cursor..].chars().next().map(|c| c.len_utf8()).unwrap_or(1);
        self.text.drain(self.cursor..self.cursor + next);
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Drain the buffer, returning its contents and leaving it empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_move_insert_backspace() {
        let mut draft = DraftState::new();
        draft.set_text("h🙂llo"); // emoji is 4 bytes
        draft.set_cursor(1); // between h and 🙂
        draft.insert_char('e');
        assert_eq!(draft.text(), "he🙂llo");
        draft.move_right(); // step over 🙂
        draft.backspace(); // delete 🙂
        assert_eq!(draft.text(), "hello");
        draft.move_left();
        draft.delete();
        assert_eq!(draft.text(), "helo");
    }

    #[test]
    fn take_drains_and_resets_cursor() {
        let mut draft = DraftState::new();
        draft.set_text("prod");
        assert_eq!(draft.take(), "prod");
        assert!(draft.is_empty());
        assert_eq!(draft.cursor(), 0);
    }

    #[test]
    fn display_column_uses_cell_width() {
        let mut draft = DraftState::new();
        draft.set_text("日本");
        draft.move_end();
        assert_eq!(draft.display_column(), 4);
        draft.move_left();
        assert_eq!(draft.display_column(), 2);
    }

    #[test]
    fn home_end_bound_cursor() {
        let mut draft = DraftState::new();
        draft.set_text("abc");
        draft.move_home();
        assert_eq!(draft.cursor(), 0);
        draft.move_left();
        assert_eq!(draft.cursor(), 0);
        draft.move_end();
        assert_eq!(draft.cursor(), 3);
        draft.move_right();
        assert_eq!(draft.cursor(), 3);
    }
}
