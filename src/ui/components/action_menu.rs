//! Action menu modal for the selected issue.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::actions::IssueAction;

/// Modal listing [`IssueAction::ALL`] as a row of buttons.
#[derive(Debug, Clone, Default)]
pub struct ActionMenu {
    visible: bool,
    selected: usize,
    /// Key of the issue the menu was opened for.
    issue_key: String,
}

impl ActionMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the menu for `issue_key` with the first action highlighted.
    pub fn show(&mut self, issue_key: impl Into<String>) {
        self.visible = true;
        self.selected = 0;
        self.issue_key = issue_key.into();
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn issue_key(&self) -> &str {
        &self.issue_key
    }

    pub fn selected_action(&self) -> IssueAction {
        IssueAction::ALL[self.selected]
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % IssueAction::ALL.len();
    }

    pub fn prev(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(IssueAction::ALL.len() - 1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.is_visible() {
            return;
        }

        let dialog_area = centered_rect(60, 7, area);
        frame.render_widget(Clear, dialog_area);

        let mut buttons = Vec::new();
        for (i, action) in IssueAction::ALL.iter().enumerate() {
            if i > 0 {
                buttons.push(Span::raw("  "));
            }
            let style = if i == self.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            buttons.push(Span::styled(format!(" {} ", action.label()), style));
        }

        let text = vec![
            Line::from(format!("Select an action for {}", self.issue_key())),
            Line::default(),
            Line::from(buttons),
        ];

        let block = Block::default()
            .title(" Actions ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(block),
            dialog_area,
        );
    }
}

/// Create a centered rectangle.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
