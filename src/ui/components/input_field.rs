//! Single- and multi-line text input with a character cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press did to an [`InputField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The text changed
    Changed,
    /// Only the cursor moved
    Moved,
    /// Enter on a single-line field
    Submit,
    /// Esc
    Cancel,
    /// Key not handled by the field
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
    multiline: bool,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the text and put the cursor at the end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.chars().count();
    }

    /// Take the text out, leaving the field empty
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.value)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn byte_pos(&self, chars: usize) -> usize {
        self.value.chars().take(chars).map(char::len_utf8).sum()
    }

    fn insert(&mut self, c: char) {
        let byte_pos = self.byte_pos(self.cursor);
        self.value.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Line and column of the cursor, for placing the terminal cursor
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before: String = self.value.chars().take(self.cursor).collect();
        let line = before.matches('\n').count();
        let col = before.rsplit('\n').next().map(|l| l.chars().count()).unwrap_or(0);
        (line, col)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputEvent {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return InputEvent::Ignored;
        }

        match key.code {
            KeyCode::Esc => InputEvent::Cancel,
            KeyCode::Enter if self.multiline => {
                self.insert('\n');
                InputEvent::Changed
            }
            KeyCode::Enter => InputEvent::Submit,
            KeyCode::Char(c) => {
                self.insert(c);
                InputEvent::Changed
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return InputEvent::Ignored;
                }
                let byte_pos = self.byte_pos(self.cursor - 1);
                self.value.remove(byte_pos);
                self.cursor -= 1;
                InputEvent::Changed
            }
            KeyCode::Delete => {
                if self.cursor >= self.value.chars().count() {
                    return InputEvent::Ignored;
                }
                let byte_pos = self.byte_pos(self.cursor);
                self.value.remove(byte_pos);
                InputEvent::Changed
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputEvent::Moved
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                InputEvent::Moved
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputEvent::Moved
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                InputEvent::Moved
            }
            _ => InputEvent::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(field: &mut InputField, code: KeyCode) -> InputEvent {
        field.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_insert_in_middle_of_multibyte_text() {
        let mut field = InputField::new();
        field.set_value("héo");
        press(&mut field, KeyCode::Left);
        assert_eq!(press(&mut field, KeyCode::Char('l')), InputEvent::Changed);
        assert_eq!(field.value(), "hélo");
        press(&mut field, KeyCode::Backspace);
        press(&mut field, KeyCode::Backspace);
        assert_eq!(field.value(), "ho");
    }

    #[test]
    fn test_enter_submits_single_line() {
        let mut field = InputField::new();
        assert_eq!(press(&mut field, KeyCode::Enter), InputEvent::Submit);
        assert!(field.is_empty());
    }

    #[test]
    fn test_enter_breaks_line_in_multiline() {
        let mut field = InputField::multiline();
        field.set_value("a");
        press(&mut field, KeyCode::Enter);
        press(&mut field, KeyCode::Char('b'));
        assert_eq!(field.value(), "a\nb");
        assert_eq!(field.cursor_line_col(), (1, 1));
    }

    #[test]
    fn test_backspace_on_empty_is_ignored() {
        let mut field = InputField::new();
        assert_eq!(press(&mut field, KeyCode::Backspace), InputEvent::Ignored);
    }
}
