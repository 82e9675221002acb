use clap::Parser;
use colored::*;
use github_repo_viewer::cli::{parse_command, Cli, Command, COMMAND_HELP};
use github_repo_viewer::render::render_state;
use github_repo_viewer::{ClientConfig, GitHubClient, Result, SearchSession, SessionState};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so they never interleave with the rendered list
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::default()
        .with_api_base_url(cli.api_url.clone())
        .with_timeout(Duration::from_secs(cli.timeout));
    let client = GitHubClient::new(config)?;
    let mut session = SearchSession::new(client);

    match cli.username {
        Some(username) => {
            session.set_query_text(username);
            session.search().await;

            let state = session.state();
            print!("{}", render_state(&state));
            if state.error_message.is_some() {
                std::process::exit(1);
            }
            Ok(())
        }
        None => run_interactive(&mut session).await,
    }
}

async fn run_interactive(session: &mut SearchSession<GitHubClient>) -> Result<()> {
    println!("{}", "GitHub Repo Viewer".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());
    print_help();

    let watcher = tokio::spawn(watch_state(session.subscribe()));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", ">".green().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Command::Search(username) => {
                session.set_query_text(username);
                session.search().await;
            }
            Command::Refresh => session.refresh().await,
            Command::Clear => session.clear(),
            Command::Help => {
                print_help();
                continue;
            }
            Command::Quit => break,
            Command::Empty => continue,
        }

        println!();
        print!("{}", render_state(&session.state()));
        println!();
    }

    watcher.abort();
    println!("{}", "Bye!".dimmed());
    Ok(())
}

/// Follows the session's published state; announces when a search starts.
async fn watch_state(mut rx: watch::Receiver<SessionState>) {
    let mut was_loading = false;

    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        debug!(
            is_loading = state.is_loading,
            results = state.results.len(),
            error = ?state.error_message,
            username = %state.last_searched_username,
            "Session state changed"
        );

        if state.is_loading && !was_loading {
            println!("{}", "Fetching fresh data...".cyan());
        }
        was_loading = state.is_loading;
    }
}

fn print_help() {
    println!("Commands:");
    for (usage, summary) in COMMAND_HELP {
        println!("  {}{}", format!("{:<20}", usage).bold(), summary);
    }
    println!();
}
