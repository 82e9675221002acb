pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod render;
pub mod session;
pub mod types;

pub use config::ClientConfig;
pub use error::{RepoViewerError, Result};
pub use github::{GitHubClient, RepositoryFetcher};
pub use session::{SearchSession, SessionState};
pub use types::Repository;
