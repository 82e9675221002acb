use crate::session::SessionState;
use crate::types::Repository;
use chrono::Local;
use colored::*;

/// Renders a session snapshot the way the terminal front end shows it.
pub fn render_state(state: &SessionState) -> String {
    let mut lines = Vec::new();

    if let Some(fetched_at) = state.last_fetch_time {
        let stamp = fetched_at.with_timezone(&Local).format("%H:%M:%S");
        lines.push(format!("Last updated: {}", stamp).dimmed().to_string());
    }

    if state.is_loading {
        lines.push("Fetching fresh data...".cyan().to_string());
        lines.push("Getting latest repositories from GitHub".dimmed().to_string());
    } else if let Some(message) = &state.error_message {
        lines.push(format!("{} {}", "⚠".yellow(), message));
        if !state.last_searched_username.is_empty() {
            lines.push("Type 'refresh' to try again".dimmed().to_string());
        }
    } else if !state.results.is_empty() {
        lines.push(format!("Repositories for: {}", state.last_searched_username).bold().to_string());
        lines.push(format!("{} repositories found", state.results.len()).dimmed().to_string());
        lines.push(String::new());
        lines.extend(state.results.iter().flat_map(repository_lines));
    } else {
        lines.push("Enter a GitHub username to search for repositories".to_string());
        lines.push("Type 'refresh' after searching to fetch fresh data".dimmed().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn repository_lines(repo: &Repository) -> Vec<String> {
    let mut lines = vec![format!("{}  {} {}", repo.name.bold(), "★".yellow(), repo.star_count)];
    if let Some(description) = &repo.description {
        lines.push(format!("    {}", description));
    }
    lines.push(format!("    {}", repo.url.dimmed()));
    lines
}
