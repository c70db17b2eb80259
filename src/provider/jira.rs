use super::IssueProvider;
use crate::error::{Result, StandupError};
use crate::model::Issue;
use serde::Deserialize;
use std::time::Duration;

/// Live issue provider backed by the Jira REST search API.
///
/// Credentials come from the environment (`JIRA_SERVER`, `JIRA_EMAIL`,
/// `JIRA_TOKEN`); missing any of them is a configuration error raised at
/// startup, before any classification runs.
pub struct JiraProvider {
    server: String,
    email: String,
    token: String,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<RawIssue>,
}

#[derive(Debug, Deserialize)]
struct RawIssue {
    key: String,
    fields: RawFields,
}

#[derive(Debug, Deserialize)]
struct RawFields {
    #[serde(default)]
    summary: String,
    status: RawStatus,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    name: String,
}

impl JiraProvider {
    pub fn from_env(timeout: Duration) -> Result<Self> {
        let server = require_env("JIRA_SERVER")?;
        let email = require_env("JIRA_EMAIL")?;
        let token = require_env("JIRA_TOKEN")?;

        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StandupError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            server: server.trim_end_matches('/').to_string(),
            email,
            token,
            http,
        })
    }
}

impl IssueProvider for JiraProvider {
    fn fetch_issues(&self, email: &str) -> Result<Vec<Issue>> {
        let jql = format!("assignee = \"{}\" AND status != Done", email);
        let url = format!("{}/rest/api/2/search", self.server);

        let response = self
            .http
            .get(&url)
            .query(&[("jql", jql.as_str()), ("maxResults", "5")])
            .basic_auth(&self.email, Some(&self.token))
            .send()
            .map_err(|e| StandupError::Provider(format!("Jira request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StandupError::Provider(format!(
                "Jira rejected the request: HTTP {}",
                status
            )));
        }

        let body: SearchResponse = response
            .json()
            .map_err(|e| StandupError::Provider(format!("Jira response was not JSON: {}", e)))?;

        Ok(body
            .issues
            .into_iter()
            .map(|raw| Issue::new(raw.key, raw.fields.summary, raw.fields.status.name))
            .collect())
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            StandupError::Config(format!("{} not set; required for live mode", key))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_shape() {
        let body = r#"{
            "issues": [
                {
                    "key": "PROJ-7",
                    "fields": {
                        "summary": "Rotate API keys",
                        "status": {"name": "In Progress"}
                    }
                }
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.issues.len(), 1);
        assert_eq!(parsed.issues[0].key, "PROJ-7");
        assert_eq!(parsed.issues[0].fields.status.name, "In Progress");
    }

    #[test]
    fn test_empty_search_response() {
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.issues.is_empty());
    }
}
