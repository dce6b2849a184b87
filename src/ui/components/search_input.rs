//! Search input component.
//!
//! A single-line text field. The cursor is a character index so multibyte
//! input never splits a code point.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme;

const PLACEHOLDER: &str = "Type to filter by key or summary";

/// The search text field.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    value: String,
    /// Cursor position in characters.
    cursor: usize,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the value changed.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let changed = !self.value.is_empty();
                self.value.clear();
                self.cursor = 0;
                changed
            }
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => self.delete_word(),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            (KeyCode::Backspace, _) => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            (KeyCode::Delete, _) => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                false
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                false
            }
            (KeyCode::End, _) => {
                self.cursor = self.char_count();
                false
            }
            _ => false,
        }
    }

    /// Delete the word before the cursor.
    fn delete_word(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let end = self.byte_index(self.cursor);
        let before = self.value[..end].trim_end();
        let start = before
            .rfind(|c: char| !c.is_alphanumeric())
            .map(|i| i + before[i..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0);
        let removed = self.value[start..end].chars().count();
        self.value.replace_range(start..end, "");
        self.cursor -= removed;
        true
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let (text, style) = if self.value.is_empty() {
            (PLACEHOLDER.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            (self.value.clone(), Style::default())
        };

        let title_style = if focused {
            Style::default().fg(theme::FOCUS).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .title(Span::styled(" Search ", title_style))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::border(focused)));

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if focused {
            let cursor_x = area.x + 1 + self.cursor() as u16;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut SearchInput, code: KeyCode) -> bool {
        input.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(input: &mut SearchInput, text: &str) {
        for c in text.chars() {
            press(input, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_appends() {
        let mut input = SearchInput::new();
        type_str(&mut input, "login");
        assert_eq!(input.value(), "login");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = SearchInput::new();
        assert!(!press(&mut input, KeyCode::Backspace));
        type_str(&mut input, "ab");
        press(&mut input, KeyCode::Home);
        assert!(!press(&mut input, KeyCode::Backspace));
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = SearchInput::new();
        type_str(&mut input, "ac");
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Char('b'));
        assert_eq!(input.value(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = SearchInput::new();
        type_str(&mut input, "héllo");
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Left);
        assert!(press(&mut input, KeyCode::Backspace));
        assert_eq!(input.value(), "hllo");
        assert!(press(&mut input, KeyCode::Delete));
        assert_eq!(input.value(), "hlo");
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut input = SearchInput::new();
        type_str(&mut input, "abc");
        press(&mut input, KeyCode::Right);
        assert_eq!(input.cursor(), 3);
        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Left);
        assert_eq!(input.cursor(), 0);
        press(&mut input, KeyCode::End);
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = SearchInput::new();
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(!input.handle_input(ctrl_u));
        type_str(&mut input, "abc");
        assert!(input.handle_input(ctrl_u));
        assert!(input.value().is_empty());
    }

    #[test]
    fn test_ctrl_w_deletes_previous_word() {
        let mut input = SearchInput::new();
        type_str(&mut input, "fix login");
        let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert!(input.handle_input(ctrl_w));
        assert_eq!(input.value(), "fix ");
        assert_eq!(input.cursor(), 4);
    }
}
