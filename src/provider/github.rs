use super::CommitProvider;
use crate::error::{Result, StandupError};
use serde::Deserialize;
use std::time::Duration;

/// How many push events to keep per member; the aggregator only needs the
/// most recent one, the rest are slack for malformed records.
const MAX_PUSH_EVENTS: usize = 5;

/// Live commit provider backed by the GitHub public events API.
///
/// Requires `GITHUB_TOKEN` in the environment. The identity key is used as
/// the GitHub login.
pub struct GithubProvider {
    token: String,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: String,
    created_at: String,
}

impl GithubProvider {
    pub fn from_env(timeout: Duration) -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                StandupError::Config("GITHUB_TOKEN not set; required for live mode".to_string())
            })?;

        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("standup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StandupError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { token, http })
    }

    fn push_timestamps(events: Vec<RawEvent>) -> Vec<String> {
        events
            .into_iter()
            .filter(|e| e.kind == "PushEvent")
            .take(MAX_PUSH_EVENTS)
            .map(|e| e.created_at)
            .collect()
    }
}

impl CommitProvider for GithubProvider {
    fn fetch_commit_timestamps(&self, login: &str) -> Result<Vec<String>> {
        let url = format!("https://api.github.com/users/{}/events/public", login);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| StandupError::Provider(format!("GitHub request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StandupError::Provider(format!(
                "GitHub rejected the request: HTTP {}",
                status
            )));
        }

        let events: Vec<RawEvent> = response
            .json()
            .map_err(|e| StandupError::Provider(format!("GitHub response was not JSON: {}", e)))?;

        Ok(Self::push_timestamps(events))
    }
}
