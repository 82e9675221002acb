use serde::Deserialize;

/// A public repository as listed by `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "stargazers_count")]
    pub star_count: u64,
    #[serde(rename = "html_url")]
    pub url: String,
}

/// Orders repositories most-starred first. The sort is stable, so equal
/// star counts keep the order the API returned them in.
pub fn sort_by_stars(repos: &mut [Repository]) {
    repos.sort_by(|a, b| b.star_count.cmp(&a.star_count));
}
