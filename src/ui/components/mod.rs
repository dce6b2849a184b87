//! Reusable UI components.

mod action_menu;
mod highlight;
mod search_input;
mod status_line;

pub use action_menu::ActionMenu;
pub use highlight::highlight_text;
pub use search_input::SearchInput;
pub use status_line::{StatusKind, StatusLine};
