use super::{CommitProvider, IssueProvider};
use crate::error::Result;
use crate::model::{Issue, Member};
use serde::Deserialize;
use std::path::Path;

/// File-backed provider for demos and tests.
///
/// One JSON roster file supplies the member list and both signals, so a
/// single `MockRoster` implements [`IssueProvider`] and [`CommitProvider`]
/// at once. The file is read once up front; lookups are in-memory.
pub struct MockRoster {
    users: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    users: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
struct UserRecord {
    name: String,
    email: String,

    #[serde(default)]
    note: String,

    #[serde(default)]
    jira_issues: Vec<Issue>,

    #[serde(default)]
    commit_timestamps: Vec<String>,

    /// Shorthand for rosters that only track the latest commit. Takes
    /// precedence over `commit_timestamps` when present.
    #[serde(default)]
    last_commit_timestamp: Option<String>,
}

impl MockRoster {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: RosterFile = serde_json::from_str(&content)?;
        Ok(Self { users: file.users })
    }

    /// The members to classify, in roster order.
    pub fn members(&self) -> Vec<Member> {
        self.users
            .iter()
            .map(|u| {
                Member::new(u.name.clone(), u.email.clone()).with_note(u.note.clone())
            })
            .collect()
    }

    fn find(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email == email)
    }
}

impl IssueProvider for MockRoster {
    fn fetch_issues(&self, email: &str) -> Result<Vec<Issue>> {
        Ok(self
            .find(email)
            .map(|u| u.jira_issues.clone())
            .unwrap_or_default())
    }
}

impl CommitProvider for MockRoster {
    fn fetch_commit_timestamps(&self, email: &str) -> Result<Vec<String>> {
        let Some(user) = self.find(email) else {
            return Ok(Vec::new());
        };
        if let Some(ts) = &user.last_commit_timestamp {
            return Ok(vec![ts.clone()]);
        }
        Ok(user.commit_timestamps.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_roster(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("team.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_and_lookup() {
        let dir = TempDir::new().unwrap();
        let path = write_roster(
            &dir,
            r#"{
                "users": [
                    {
                        "name": "Alice",
                        "email": "alice@example.com",
                        "note": "on-call",
                        "jira_issues": [
                            {"key": "PROJ-1", "summary": "Fix login", "status": "In Progress"}
                        ],
                        "commit_timestamps": ["2026-01-10T09:00:00Z"]
                    }
                ]
            }"#,
        );

        let roster = MockRoster::load(&path).unwrap();
        let members = roster.members();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].note, "on-call");

        let issues = roster.fetch_issues("alice@example.com").unwrap();
        assert_eq!(issues[0].key, "PROJ-1");

        let commits = roster.fetch_commit_timestamps("alice@example.com").unwrap();
        assert_eq!(commits, vec!["2026-01-10T09:00:00Z"]);
    }

    #[test]
    fn test_unknown_identity_is_empty_not_error() {
        let dir = TempDir::new().unwrap();
        let path = write_roster(&dir, r#"{"users": []}"#);
        let roster = MockRoster::load(&path).unwrap();

        assert!(roster.fetch_issues("nobody@example.com").unwrap().is_empty());
        assert!(
            roster
                .fetch_commit_timestamps("nobody@example.com")
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_last_commit_shorthand_wins() {
        let dir = TempDir::new().unwrap();
        let path = write_roster(
            &dir,
            r#"{
                "users": [
                    {
                        "name": "Bob",
                        "email": "bob@example.com",
                        "commit_timestamps": ["2026-01-01T00:00:00Z", "2026-01-02T00:00:00Z"],
                        "last_commit_timestamp": "2026-01-11T08:30:00Z"
                    }
                ]
            }"#,
        );
        let roster = MockRoster::load(&path).unwrap();
        let commits = roster.fetch_commit_timestamps("bob@example.com").unwrap();
        assert_eq!(commits, vec!["2026-01-11T08:30:00Z"]);
    }

    #[test]
    fn test_malformed_roster_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write_roster(&dir, "not json at all");
        assert!(MockRoster::load(&path).is_err());
    }
}
