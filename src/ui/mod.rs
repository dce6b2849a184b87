//! User interface components and views.
//!
//! Rendering only reads the session; all mutation happens in `App::update`.

mod components;
pub mod theme;
mod views;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub use components::{ActionMenu, SearchInput, StatusKind, StatusLine};
pub use views::{DetailView, ListView};

/// Screen regions of the main layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub search: Rect,
    pub list: Rect,
    pub status: Rect,
    pub detail: Rect,
}

impl AppLayout {
    /// Left column: search (3 rows), list, status (3 rows). Right column: detail.
    pub fn split(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(columns[0]);

        Self {
            search: left[0],
            list: left[1],
            status: left[2],
            detail: columns[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let layout = AppLayout::split(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.status.height, 3);
        assert_eq!(layout.list.height, 24);
        assert_eq!(layout.search.x, 0);
        assert_eq!(layout.detail.x, 40);
        assert_eq!(layout.detail.height, 30);
    }
}
