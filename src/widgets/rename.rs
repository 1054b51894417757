//! Rename field: the text field an item shows while it is being renamed.
//!
//! Supports cursor movement, character insertion/deletion and a whole-value
//! selection that the first edit replaces.

use crate::event::input::{Key, KeyEvent};

// ---------------------------------------------------------------------------
// RenameField
// ---------------------------------------------------------------------------

/// A single-line text field with cursor and select-all support.
///
/// The cursor position is tracked as a byte offset into the value string.
/// All cursor operations are char-boundary safe.
///
/// A freshly opened field is pre-filled and fully selected, so typing
/// replaces the old label while arrow keys keep it for editing.
///
/// # Examples
///
/// ```
/// use sidenav_tree::widgets::RenameField;
///
/// let mut field = RenameField::new("Old");
/// field.insert_char('N');
/// assert_eq!(field.value(), "N");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameField {
    value: String,
    cursor_position: usize,
    all_selected: bool,
}

impl RenameField {
    /// Open a field pre-filled with `value`, fully selected.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor_position = value.len();
        Self {
            value,
            cursor_position,
            all_selected: true,
        }
    }

    /// Return the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value, moving the cursor to the end and clearing the selection.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_position = self.value.len();
        self.all_selected = false;
    }

    /// Select the whole value.
    pub fn select_all(&mut self) {
        self.all_selected = true;
        self.cursor_position = self.value.len();
    }

    /// Whether the whole value is selected.
    pub fn is_all_selected(&self) -> bool {
        self.all_selected && !self.value.is_empty()
    }

    /// Return the cursor position (byte offset).
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Insert a character at the cursor, replacing the selection if any.
    pub fn insert_char(&mut self, ch: char) {
        self.take_selection();
        self.value.insert(self.cursor_position, ch);
        self.cursor_position += ch.len_utf8();
    }

    /// Delete the character before the cursor (backspace), or the selection.
    pub fn delete_char(&mut self) {
        if self.take_selection() || self.cursor_position == 0 {
            return;
        }
        let prev = self.prev_char_boundary();
        self.value.drain(prev..self.cursor_position);
        self.cursor_position = prev;
    }

    /// Delete the character after the cursor, or the selection.
    pub fn delete_forward(&mut self) {
        if self.take_selection() || self.cursor_position >= self.value.len() {
            return;
        }
        let next = self.next_char_boundary();
        self.value.drain(self.cursor_position..next);
    }

    /// Move the cursor left by one character. Collapses a selection to its start.
    pub fn move_cursor_left(&mut self) {
        if self.all_selected {
            self.all_selected = false;
            self.cursor_position = 0;
        } else if self.cursor_position > 0 {
            self.cursor_position = self.prev_char_boundary();
        }
    }

    /// Move the cursor right by one character. Collapses a selection to its end.
    pub fn move_cursor_right(&mut self) {
        if self.all_selected {
            self.all_selected = false;
            self.cursor_position = self.value.len();
        } else if self.cursor_position < self.value.len() {
            self.cursor_position = self.next_char_boundary();
        }
    }

    /// Move the cursor to the start of the field.
    pub fn move_cursor_home(&mut self) {
        self.all_selected = false;
        self.cursor_position = 0;
    }

    /// Move the cursor to the end of the field.
    pub fn move_cursor_end(&mut self) {
        self.all_selected = false;
        self.cursor_position = self.value.len();
    }

    /// Apply an editing key. Returns `false` for keys the field does not edit
    /// with (commit/cancel keys, function keys, control chords).
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        match event.code {
            Key::Char(ch) if !event.is_chord() => self.insert_char(ch),
            Key::Backspace => self.delete_char(),
            Key::Delete => self.delete_forward(),
            Key::Left => self.move_cursor_left(),
            Key::Right => self.move_cursor_right(),
            Key::Home => self.move_cursor_home(),
            Key::End => self.move_cursor_end(),
            _ => return false,
        }
        true
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Clear the value if it is fully selected. Returns whether it was.
    fn take_selection(&mut self) -> bool {
        if !self.all_selected {
            return false;
        }
        self.all_selected = false;
        self.value.clear();
        self.cursor_position = 0;
        true
    }

    fn prev_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position.saturating_sub(1);
        while pos > 0 && !self.value.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position + 1;
        while pos < self.value.len() && !self.value.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }
}

impl Default for RenameField {
    fn default() -> Self {
        Self::new("")
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::input::Modifiers;

    fn key(code: Key) -> KeyEvent {
        KeyEvent::new(code, Modifiers::NONE)
    }

    #[test]
    fn opens_prefilled_and_selected() {
        let field = RenameField::new("Docs");
        assert_eq!(field.value(), "Docs");
        assert_eq!(field.cursor_position(), 4);
        assert!(field.is_all_selected());
    }

    #[test]
    fn empty_field_has_no_selection() {
        assert!(!RenameField::default().is_all_selected());
    }

    #[test]
    fn typing_replaces_selection() {
        let mut field = RenameField::new("Docs");
        field.insert_char('X');
        field.insert_char('y');
        assert_eq!(field.value(), "Xy");
        assert_eq!(field.cursor_position(), 2);
    }

    #[test]
    fn backspace_clears_selection() {
        let mut field = RenameField::new("Docs");
        field.delete_char();
        assert_eq!(field.value(), "");
        field.delete_char();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn delete_forward_clears_selection() {
        let mut field = RenameField::new("Docs");
        field.delete_forward();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn right_collapses_selection_to_end_then_appends() {
        let mut field = RenameField::new("Doc");
        field.move_cursor_right();
        assert!(!field.is_all_selected());
        field.insert_char('s');
        assert_eq!(field.value(), "Docs");
    }

    #[test]
    fn left_collapses_selection_to_start() {
        let mut field = RenameField::new("ocs");
        field.move_cursor_left();
        assert_eq!(field.cursor_position(), 0);
        field.insert_char('D');
        assert_eq!(field.value(), "Docs");
    }

    #[test]
    fn editing_after_collapse() {
        let mut field = RenameField::new("abc");
        field.move_cursor_end();
        field.delete_char();
        assert_eq!(field.value(), "ab");
        field.move_cursor_home();
        field.delete_forward();
        assert_eq!(field.value(), "b");
        field.move_cursor_left();
        assert_eq!(field.cursor_position(), 0);
    }

    #[test]
    fn set_value_clears_selection() {
        let mut field = RenameField::new("old");
        field.set_value("new");
        assert_eq!(field.value(), "new");
        assert!(!field.is_all_selected());
        field.select_all();
        assert!(field.is_all_selected());
    }

    #[test]
    fn unicode_editing() {
        let mut field = RenameField::new("a\u{00e9}b");
        field.move_cursor_end();
        field.move_cursor_left();
        assert_eq!(field.cursor_position(), 3);
        field.move_cursor_left();
        assert_eq!(field.cursor_position(), 1);
        field.delete_forward();
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn handle_key_edits() {
        let mut field = RenameField::new("x");
        assert!(field.handle_key(&key(Key::Char('h'))));
        assert!(field.handle_key(&key(Key::Char('i'))));
        assert!(field.handle_key(&key(Key::Backspace)));
        assert_eq!(field.value(), "h");
    }

    #[test]
    fn handle_key_ignores_commit_keys_and_chords() {
        let mut field = RenameField::new("x");
        assert!(!field.handle_key(&key(Key::Enter)));
        assert!(!field.handle_key(&key(Key::Escape)));
        assert!(!field.handle_key(&KeyEvent::new(Key::Char('a'), Modifiers::CTRL)));
        assert_eq!(field.value(), "x");
    }
}
