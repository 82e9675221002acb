use github_repo_viewer::error::{RepoViewerError, Result};
use github_repo_viewer::{Repository, RepositoryFetcher};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn repo(id: u64, name: &str, stars: u64) -> Repository {
    Repository {
        id,
        name: name.to_string(),
        description: Some(format!("{} description", name)),
        star_count: stars,
        url: format!("https://github.com/octocat/{}", name),
    }
}

pub fn decode_failure() -> RepoViewerError {
    let err = serde_json::from_str::<Vec<Repository>>(r#"{"message": "oops"}"#).unwrap_err();
    RepoViewerError::DecodeFailure(err)
}

/// Pauses a fetch until the test has looked at the session.
#[derive(Clone, Default)]
pub struct FetchGate {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

/// In-memory fetcher that replays scripted outcomes and records every call.
/// Once the script runs out it answers with an empty list.
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<Vec<Repository>>>>,
    calls: Mutex<Vec<String>>,
    gate: Option<FetchGate>,
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<Result<Vec<Repository>>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Default::default()
        }
    }

    pub fn gated(responses: Vec<Result<Vec<Repository>>>) -> (Self, FetchGate) {
        let gate = FetchGate::default();
        let fetcher = Self {
            gate: Some(gate.clone()),
            ..Self::new(responses)
        };
        (fetcher, gate)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl RepositoryFetcher for ScriptedFetcher {
    async fn fetch(&self, username: &str) -> Result<Vec<Repository>> {
        self.calls.lock().unwrap().push(username.to_string());

        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(Vec::new()))
    }
}
