use clap::Parser;

use crate::config::DEFAULT_API_BASE_URL;

#[derive(Parser)]
#[command(name = "github-repo-viewer")]
#[command(about = "GitHub Repo Viewer - Lists a user's public repositories, most-starred first")]
#[command(version)]
pub struct Cli {
    /// GitHub username to look up; starts an interactive session when omitted
    pub username: Option<String>,

    /// GitHub REST API base URL
    #[arg(long = "api-url", env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "GITHUB_REPO_VIEWER_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,
}

/// A line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Refresh,
    Clear,
    Help,
    Quit,
    Empty,
}

/// Usage and summary for each interactive command, in display order.
pub const COMMAND_HELP: [(&str, &str); 5] = [
    ("search <username>", "look up a user's repositories"),
    ("refresh", "fetch fresh data for the last user"),
    ("clear", "forget the current results"),
    ("help", "show this list"),
    ("quit", "leave"),
];

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "" => Command::Empty,
        "search" | "s" => Command::Search(rest.to_string()),
        "refresh" | "r" => Command::Refresh,
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Search(line.to_string()),
    }
}
