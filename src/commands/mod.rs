//! Non-interactive subcommands.
//!
//! Each command performs one catalog request and prints one line per record
//! to stdout.

use tracing::info;

use crate::api::types::{Board, Sprint, Status, User};
use crate::api::{ApiError, JiraClient};
use crate::cli::Commands;

/// Run `command` against `client` and return the lines to print.
pub async fn run(command: &Commands, client: &JiraClient) -> Result<Vec<String>, ApiError> {
    info!(?command, "Running subcommand");
    let lines = match command {
        Commands::Statuses => format_statuses(&client.get_statuses().await?),
        Commands::Users { query } => format_users(&client.search_users(query).await?),
        Commands::Boards => format_boards(&client.get_boards().await?),
        Commands::Sprints { board_id } => format_sprints(&client.get_sprints(*board_id).await?),
    };
    Ok(lines)
}

pub fn format_statuses(statuses: &[Status]) -> Vec<String> {
    statuses.iter().map(|s| s.name.clone()).collect()
}

/// `Display Name <email>`, with inactive users marked.
pub fn format_users(users: &[User]) -> Vec<String> {
    users
        .iter()
        .map(|u| {
            let mut line = u.display_name.clone();
            if let Some(email) = &u.email_address {
                line.push_str(&format!(" <{}>", email));
            }
            if !u.active {
                line.push_str(" (inactive)");
            }
            line
        })
        .collect()
}

pub fn format_boards(boards: &[Board]) -> Vec<String> {
    boards
        .iter()
        .map(|b| match &b.board_type {
            Some(kind) => format!("{}\t{}\t{}", b.id, b.name, kind),
            None => format!("{}\t{}", b.id, b.name),
        })
        .collect()
}

pub fn format_sprints(sprints: &[Sprint]) -> Vec<String> {
    sprints
        .iter()
        .map(|s| format!("{}\t{}\t{}", s.id, s.name, s.state))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::user;

    #[test]
    fn test_format_statuses() {
        let statuses = vec![
            Status {
                id: Some("1".to_string()),
                name: "To Do".to_string(),
            },
            Status {
                id: None,
                name: "Done".to_string(),
            },
        ];
        assert_eq!(format_statuses(&statuses), vec!["To Do", "Done"]);
    }

    #[test]
    fn test_format_users_marks_inactive() {
        let mut jane = user("Jane");
        jane.email_address = Some("jane@example.com".to_string());
        let mut old = user("Old Account");
        old.active = false;

        assert_eq!(
            format_users(&[jane, old]),
            vec!["Jane <jane@example.com>", "Old Account (inactive)"]
        );
    }

    #[test]
    fn test_format_boards_and_sprints() {
        let boards = vec![
            Board {
                id: 7,
                name: "ABC board".to_string(),
                board_type: Some("scrum".to_string()),
            },
            Board {
                id: 8,
                name: "Ops".to_string(),
                board_type: None,
            },
        ];
        assert_eq!(format_boards(&boards), vec!["7\tABC board\tscrum", "8\tOps"]);

        let sprints = vec![Sprint {
            id: 3,
            name: "Sprint 3".to_string(),
            state: "active".to_string(),
        }];
        assert_eq!(format_sprints(&sprints), vec!["3\tSprint 3\tactive"]);
    }

    #[test]
    fn test_empty_catalogs_print_nothing() {
        assert!(format_statuses(&[]).is_empty());
        assert!(format_boards(&[]).is_empty());
    }
}
