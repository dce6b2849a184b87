//! Colors for issue categories and UI chrome.

use ratatui::style::Color;

use crate::session::projection::{IssueTypeCategory, PriorityCategory, StatusCategory};

pub const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Border color of the focused pane.
pub const FOCUS: Color = Color::Yellow;

/// Border color of unfocused panes.
pub const UNFOCUSED: Color = Color::DarkGray;

pub fn status_color(category: StatusCategory) -> Color {
    match category {
        StatusCategory::ToDo => Color::Red,
        StatusCategory::InProgress => Color::Blue,
        StatusCategory::Done => Color::Green,
        StatusCategory::SelectedForDevelopment => Color::Magenta,
        StatusCategory::InTesting | StatusCategory::ReadyForTest => Color::Yellow,
        StatusCategory::Other => Color::White,
    }
}

pub fn issue_type_color(category: IssueTypeCategory) -> Color {
    match category {
        IssueTypeCategory::Bug => Color::Red,
        IssueTypeCategory::Story => Color::Green,
        IssueTypeCategory::Task => Color::Blue,
        IssueTypeCategory::Epic => ORANGE,
        IssueTypeCategory::Other => Color::White,
    }
}

pub fn priority_color(category: PriorityCategory) -> Color {
    match category {
        PriorityCategory::Highest => Color::Red,
        PriorityCategory::High => ORANGE,
        PriorityCategory::Medium => Color::Yellow,
        PriorityCategory::Low => Color::Blue,
        PriorityCategory::Lowest => Color::Gray,
        PriorityCategory::Other => Color::White,
    }
}

/// Border color for a pane given its focus.
pub fn border(focused: bool) -> Color {
    if focused {
        FOCUS
    } else {
        UNFOCUSED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_categories_are_white() {
        assert_eq!(status_color(StatusCategory::Other), Color::White);
        assert_eq!(issue_type_color(IssueTypeCategory::Other), Color::White);
        assert_eq!(priority_color(PriorityCategory::Other), Color::White);
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(StatusCategory::ToDo), Color::Red);
        assert_eq!(status_color(StatusCategory::Done), Color::Green);
        assert_eq!(status_color(StatusCategory::ReadyForTest), Color::Yellow);
        assert_eq!(status_color(StatusCategory::SelectedForDevelopment), Color::Magenta);
    }

    #[test]
    fn test_epic_and_high_share_orange() {
        assert_eq!(issue_type_color(IssueTypeCategory::Epic), ORANGE);
        assert_eq!(priority_color(PriorityCategory::High), ORANGE);
    }
}
