//! Single-message status line.
//!
//! Unlike a toast queue, only the latest message is kept and it stays until
//! replaced.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The kind of status message, which determines its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Informational message (blue).
    Info,
    /// Success message (green).
    Success,
    /// Error message (red).
    Error,
}

impl StatusKind {
    pub fn icon(&self) -> &'static str {
        match self {
            StatusKind::Info => "ℹ",
            StatusKind::Success => "✓",
            StatusKind::Error => "✗",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            StatusKind::Info => Color::Blue,
            StatusKind::Success => Color::Green,
            StatusKind::Error => Color::Red,
        }
    }
}

/// The current status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    message: String,
    kind: StatusKind,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::info("")
    }
}

impl StatusLine {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn set(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.kind = kind;
        self.message = message.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let kind = self.kind();
        let style = Style::default().fg(kind.color());
        let line = if self.message().is_empty() {
            Line::default()
        } else {
            Line::from(vec![
                Span::styled(format!("{} ", kind.icon()), style),
                Span::styled(self.message().to_string(), style),
            ])
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
