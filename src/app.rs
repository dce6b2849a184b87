//! Main application state and event loop.
//!
//! The app follows The Elm Architecture: `update` applies one event, `view`
//! renders the current state. The app owns the session and is its only
//! mutator; background results arrive through `handle_message`.

use tracing::{debug, error, info, trace, warn};

use ratatui::Frame;

use crate::actions::{generate_branch_name, IssueAction, SideEffects};
use crate::api::client::browse_url;
use crate::api::JiraClient;
use crate::config::Settings;
use crate::error::{AppError, Result};
use crate::events::keys::map_key;
use crate::events::{Event, Focus, KeyAction};
use crate::session::{FetchOutcome, FilterSet, Session};
use crate::tasks::{ApiMessage, TaskSpawner};
use crate::ui::{
    ActionMenu, AppLayout, DetailView, ListView, SearchInput, StatusKind, StatusLine,
};

pub const FETCHING: &str = "Fetching Jira tickets...";
pub const NO_TICKETS_FOUND: &str = "No tickets found for the provided JQL.";

/// The main application struct that holds all state.
pub struct App {
    session: Session,
    focus: Focus,
    search: SearchInput,
    status: StatusLine,
    menu: ActionMenu,
    list_view: ListView,
    detail_view: DetailView,
    settings: Settings,
    side_effects: Box<dyn SideEffects>,
    should_quit: bool,
}

impl App {
    /// Create an app over `settings`, starting with `filters` applied.
    pub fn new(settings: Settings, filters: FilterSet, side_effects: Box<dyn SideEffects>) -> Self {
        debug!(filters = %filters, "Creating application");
        Self {
            session: Session::with_filters(filters),
            focus: Focus::Search,
            search: SearchInput::new(),
            status: StatusLine::default(),
            menu: ActionMenu::new(),
            list_view: ListView::new(),
            detail_view: DetailView::new(),
            settings,
            side_effects,
            should_quit: false,
        }
    }

    /// Issue the session's one fetch in the background.
    pub fn start(&mut self, spawner: &TaskSpawner, client: &JiraClient) {
        if let Some(jql) = self.request_fetch() {
            spawner.spawn_fetch_issues(client, jql, self.settings.max_results);
        }
    }

    /// Move the session into `Fetching` and return the query to run, or
    /// `None` when a fetch was already requested.
    pub fn request_fetch(&mut self) -> Option<String> {
        if !self.session.begin_fetch() {
            return None;
        }
        self.status.set(StatusKind::Info, FETCHING);
        Some(self.settings.jql.clone())
    }

    /// Apply a result delivered by a background task.
    pub fn handle_message(&mut self, message: ApiMessage) {
        match message {
            ApiMessage::IssuesFetched { jql, result } => {
                if let Err(e) = &result {
                    if e.is_auth_failure() {
                        warn!("JIRA rejected the supplied credentials");
                    } else if e.is_timeout() {
                        warn!(jql = %jql, "Issue search timed out");
                    }
                }

                match self.session.apply_fetch(result) {
                    FetchOutcome::Loaded(count) => {
                        info!(count, jql = %jql, "Issues loaded");
                        let shown = self.session().displayed_len();
                        let message = if self.session().filters().is_empty() {
                            format!("Loaded {} tickets.", count)
                        } else {
                            format!(
                                "Loaded {} tickets, {} shown ({}).",
                                count,
                                shown,
                                self.session.filters()
                            )
                        };
                        self.status.set(StatusKind::Success, message);
                        self.detail_view.reset_scroll();
                    }
                    FetchOutcome::Empty => {
                        info!(jql = %jql, "Query matched no issues");
                        self.status.set(StatusKind::Info, NO_TICKETS_FOUND);
                    }
                    FetchOutcome::Failed(message) => {
                        self.status
                            .set(StatusKind::Error, format!("Error fetching tickets: {}", message));
                    }
                    FetchOutcome::Ignored => {}
                }
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn is_menu_visible(&self) -> bool {
        self.menu.is_visible()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Show a non-fatal error on the status line.
    fn report(&mut self, error: AppError) {
        if error.is_critical() {
            error!(error = %error, "Action failed");
        } else {
            warn!(error = %error, "Action failed");
        }
        self.status.set(StatusKind::Error, error.user_message());
    }

    /// Update application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let action = map_key(self.focus, key);
                trace!(?key, ?action, focus = ?self.focus, "Key event");
                self.handle_action(action);
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
            }
            Event::Tick => {}
        }
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyAction::FocusList => self.focus = Focus::List,
            KeyAction::FocusSearch => self.focus = Focus::Search,
            KeyAction::MoveUp => match self.session.selected_index() {
                Some(i) if i > 0 => self.select(i - 1),
                _ => self.focus = Focus::Search,
            },
            KeyAction::MoveDown => {
                let next = self.session.selected_index().map_or(0, |i| i + 1);
                if next < self.session.displayed_len() {
                    self.select(next);
                }
            }
            KeyAction::OpenMenu => {
                match self.session.selected_issue().map(|issue| issue.key.clone()) {
                    Ok(key) => {
                        self.menu.show(key);
                        self.focus = Focus::ActionMenu;
                    }
                    Err(e) => self.report(e.into()),
                }
            }
            KeyAction::MenuPrev => self.menu.prev(),
            KeyAction::MenuNext => self.menu.next(),
            KeyAction::MenuConfirm => {
                let action = self.menu.selected_action();
                self.close_menu();
                if let Err(e) = self.run_action(action) {
                    self.report(e);
                }
            }
            KeyAction::MenuCancel => self.close_menu(),
            KeyAction::ScrollDetailUp => self.detail_view.scroll_up(),
            KeyAction::ScrollDetailDown => self.detail_view.scroll_down(),
            KeyAction::Edit(key) => {
                if self.search.handle_input(key) {
                    self.session.set_search(self.search.value());
                    self.detail_view.reset_scroll();
                }
            }
            KeyAction::None => {}
        }
    }

    fn select(&mut self, index: usize) {
        match self.session.select(index as isize).map(|_| ()) {
            Ok(()) => self.detail_view.reset_scroll(),
            Err(e) => self.report(e.into()),
        }
    }

    fn close_menu(&mut self) {
        self.menu.hide();
        self.focus = Focus::List;
    }

    /// Run a menu action against the (re-validated) selected issue.
    fn run_action(&mut self, action: IssueAction) -> Result<()> {
        let issue = self.session.selected_issue()?;
        match action {
            IssueAction::OpenInBrowser => {
                let url = browse_url(&self.settings.base_url, &issue.key);
                self.status.set(StatusKind::Info, format!("Opening {}...", url));
                self.side_effects.open_url(&url)?;
                info!(url = %url, "Opened issue in browser");
                self.status
                    .set(StatusKind::Success, format!("Opened {} in browser.", url));
            }
            IssueAction::GenerateBranchName => {
                let name = generate_branch_name(issue, &self.settings.branch_prefix);
                self.side_effects.copy_text(&name)?;
                info!(branch = %name, "Branch name copied");
                self.status
                    .set(StatusKind::Success, format!("Copied to clipboard: {}", name));
            }
            IssueAction::Cancel => {}
        }
        Ok(())
    }

    /// Render the application UI.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::split(area);
        let focus = self.focus();

        self.search.render(frame, layout.search, focus == Focus::Search);
        self.list_view
            .render(frame, layout.list, &self.session, focus == Focus::List);
        self.status().render(frame, layout.status);
        self.detail_view.render(frame, layout.detail, self.session());
        if self.is_menu_visible() {
            self.menu.render(frame, area);
        }
    }
}
