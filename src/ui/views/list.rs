//! Issue list view.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::session::projection::StatusCategory;
use crate::session::{FetchState, Session};
use crate::ui::components::highlight_text;
use crate::ui::theme;

/// The issue list view.
///
/// Selection lives in the session; the view only keeps the scroll offset
/// between frames.
#[derive(Debug, Default)]
pub struct ListView {
    state: ListState,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title showing shown/total counts once issues are installed.
    pub fn title(session: &Session) -> String {
        match session.state() {
            FetchState::Populated => format!(
                " Tickets ({}/{}) ",
                session.displayed_len(),
                session.issues().len()
            ),
            _ => " Tickets ".to_string(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, session: &Session, focused: bool) {
        let block = Block::default()
            .title(Span::styled(
                Self::title(session),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::border(focused)));

        if session.displayed_len() == 0 {
            let placeholder = match session.state() {
                FetchState::Idle | FetchState::Fetching => "Loading...",
                FetchState::Populated | FetchState::FetchFailed(_) => "No tickets",
            };
            frame.render_widget(
                Paragraph::new(placeholder)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = session
            .displayed()
            .map(|issue| {
                let color = theme::status_color(StatusCategory::from_name(issue.status()));
                let line = highlight_text(
                    &issue.to_string(),
                    session.search(),
                    Style::default().fg(color),
                );
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        self.state.select(session.selected_index());
        frame.render_stateful_widget(list, area, &mut self.state);
    }
}
