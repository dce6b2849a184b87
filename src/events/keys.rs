//! Key binding definitions.
//!
//! Bindings depend only on which pane has focus; position-dependent behavior
//! (Up on the first row returning to search) is resolved by the app.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which pane receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    List,
    ActionMenu,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    FocusList,
    FocusSearch,
    MoveUp,
    MoveDown,
    OpenMenu,
    MenuPrev,
    MenuNext,
    MenuConfirm,
    MenuCancel,
    ScrollDetailUp,
    ScrollDetailDown,
    /// Forward to the search input.
    Edit(KeyEvent),
    None,
}

/// Map a key press to an action for the focused pane.
pub fn map_key(focus: Focus, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match focus {
        Focus::Search => match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyAction::FocusList,
            KeyCode::PageUp => KeyAction::ScrollDetailUp,
            KeyCode::PageDown => KeyAction::ScrollDetailDown,
            KeyCode::Esc => KeyAction::None,
            _ => KeyAction::Edit(key),
        },
        Focus::List => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::BackTab | KeyCode::Char('/') => KeyAction::FocusSearch,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,
            KeyCode::Enter => KeyAction::OpenMenu,
            KeyCode::PageUp => KeyAction::ScrollDetailUp,
            KeyCode::PageDown => KeyAction::ScrollDetailDown,
            _ => KeyAction::None,
        },
        Focus::ActionMenu => match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::BackTab => KeyAction::MenuPrev,
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => KeyAction::MenuNext,
            KeyCode::Enter => KeyAction::MenuConfirm,
            KeyCode::Esc => KeyAction::MenuCancel,
            _ => KeyAction::None,
        },
    }
}
