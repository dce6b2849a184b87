//! Issue detail view.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::session::projection::{IssueDetail, NO_DESCRIPTION};
use crate::session::{FetchState, Session};
use crate::ui::theme;

pub const NO_MATCHES: &str = "No tickets match your criteria.";
pub const SELECT_PROMPT: &str = "Select a ticket to view details.";

/// Lines moved per PageUp/PageDown.
const SCROLL_STEP: u16 = 10;

/// Scrollable detail pane for the selected issue.
#[derive(Debug, Default)]
pub struct DetailView {
    scroll: u16,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(SCROLL_STEP);
    }

    /// Back to the top; called whenever the selection changes.
    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    /// Text shown when there is no issue to project.
    pub fn placeholder(session: &Session) -> &'static str {
        if *session.state() == FetchState::Populated && session.displayed_len() == 0 {
            NO_MATCHES
        } else {
            SELECT_PROMPT
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let detail = session.selected_detail().ok();

        let border_color = detail
            .as_ref()
            .map(|d| theme::status_color(d.status.category))
            .unwrap_or(theme::UNFOCUSED);

        let block = Block::default()
            .title(Span::styled(
                " Ticket Details ",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let paragraph = match detail {
            Some(detail) => Paragraph::new(detail_lines(&detail))
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            None => Paragraph::new(Self::placeholder(session))
                .style(Style::default().fg(Color::DarkGray)),
        };

        frame.render_widget(paragraph.block(block), area);
    }
}

fn field(label: &str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<11}", format!("{}:", label)),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, value_style),
    ])
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

/// Styled rendering of a projection.
pub fn detail_lines(detail: &IssueDetail) -> Vec<Line<'static>> {
    let plain = Style::default();
    let mut lines = vec![
        field("Key", detail.key.clone(), plain.add_modifier(Modifier::BOLD)),
        field("Summary", detail.summary.clone(), plain),
        field(
            "Status",
            detail.status.name.clone(),
            plain.fg(theme::status_color(detail.status.category)),
        ),
        field(
            "Type",
            detail.issue_type.name.clone(),
            plain.fg(theme::issue_type_color(detail.issue_type.category)),
        ),
    ];

    if let Some(priority) = &detail.priority {
        lines.push(field(
            "Priority",
            priority.name.clone(),
            plain.fg(theme::priority_color(priority.category)),
        ));
    }
    lines.push(field("Assignee", detail.assignee.clone(), plain));
    if let Some(reporter) = &detail.reporter {
        lines.push(field("Reporter", reporter.clone(), plain));
    }
    lines.push(field("Created", detail.created.clone(), plain));
    lines.push(field("Updated", detail.updated.clone(), plain));

    lines.push(Line::default());
    lines.push(heading("Description"));
    let description_style = if detail.description == NO_DESCRIPTION {
        plain.fg(Color::DarkGray)
    } else {
        plain
    };
    lines.extend(
        detail
            .description
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), description_style))),
    );

    lines.push(Line::default());
    lines.push(heading("Comments"));
    lines.extend(detail.comments_text().lines().map(|l| Line::from(l.to_string())));

    lines
}
