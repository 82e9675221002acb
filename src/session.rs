use crate::github::RepositoryFetcher;
use crate::types::{sort_by_stars, Repository};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{info, warn};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a username";
pub const NO_REPOSITORIES_MESSAGE: &str = "No repositories found for this user";

/// Everything the presentation layer renders.
///
/// `is_loading` and `error_message` are independent: a failed refresh shows
/// an error next to the results of the previous fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub query_text: String,
    pub results: Vec<Repository>,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub last_searched_username: String,
    pub last_fetch_time: Option<DateTime<Utc>>,
}

/// Search/refresh orchestrator for a single UI session.
///
/// Operations take `&mut self`, so a session never has two fetches in flight.
/// Subscribers obtained from [`SearchSession::subscribe`] are notified on every
/// state change.
pub struct SearchSession<F> {
    fetcher: F,
    state: watch::Sender<SessionState>,
}

impl<F: RepositoryFetcher> SearchSession<F> {
    pub fn new(fetcher: F) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self { fetcher, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// The fetcher driving this session, for inspecting a fake's recorded calls.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_modify(|s| s.query_text = text);
    }

    pub async fn search(&mut self) {
        let username = self.state.borrow().query_text.trim().to_string();

        if username.is_empty() {
            self.state
                .send_modify(|s| s.error_message = Some(EMPTY_QUERY_MESSAGE.to_string()));
            return;
        }

        info!(username = %username, "Starting search");

        self.state.send_modify(|s| {
            s.last_searched_username = username.clone();
            s.is_loading = true;
            s.error_message = None;
            s.results.clear();
        });

        self.perform_fetch(&username, false).await;
    }

    pub async fn refresh(&mut self) {
        let username = self.state.borrow().last_searched_username.clone();

        if username.is_empty() {
            warn!("No previous search to refresh");
            return;
        }

        info!(username = %username, "Refreshing repositories");

        self.state.send_modify(|s| s.error_message = None);
        self.perform_fetch(&username, true).await;
    }

    pub fn clear(&mut self) {
        self.state.send_modify(|s| {
            s.results.clear();
            s.error_message = None;
            s.last_searched_username.clear();
            s.last_fetch_time = None;
        });
        info!("Cleared session data");
    }

    async fn perform_fetch(&mut self, username: &str, is_refresh: bool) {
        let outcome = self.fetcher.fetch(username).await;

        self.state.send_modify(|s| {
            match outcome {
                Ok(mut repos) => {
                    // Results stay most-starred first whatever the fetcher returned
                    sort_by_stars(&mut repos);
                    s.error_message = if repos.is_empty() {
                        Some(NO_REPOSITORIES_MESSAGE.to_string())
                    } else {
                        None
                    };
                    info!(username, count = repos.len(), is_refresh, "Loaded repositories");
                    s.results = repos;
                    s.last_fetch_time = Some(Utc::now());
                }
                Err(e) => {
                    warn!(username, is_refresh, error = %e, "Error fetching repositories");
                    s.error_message = Some(e.to_string());
                    if !is_refresh {
                        s.results.clear();
                    }
                }
            }

            if !is_refresh {
                s.is_loading = false;
            }
        });
    }
}
