use serde::{Deserialize, Serialize};
use std::fmt;

/// A tracker issue assigned to a member.
///
/// `status` is whatever label the tracker reports; the classifier only cares
/// about the semantic bucket, see [`IssueState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    pub summary: String,
    pub status: String,
}

impl Issue {
    pub fn new(
        key: impl Into<String>,
        summary: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            summary: summary.into(),
            status: status.into(),
        }
    }

    /// The semantic bucket of this issue's tracker label.
    pub fn state(&self) -> IssueState {
        IssueState::from_label(&self.status)
    }
}

/// Semantic bucket for tracker status labels.
///
/// Trackers use an open set of labels; only three distinctions matter here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueState {
    /// Work is ongoing ("In Progress").
    Active,
    /// Work is finished ("Done").
    Terminal,
    /// Anything else: backlog, review, blocked, custom labels.
    Other,
}

impl IssueState {
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "in progress" => IssueState::Active,
            "done" => IssueState::Terminal,
            _ => IssueState::Other,
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueState::Active => write!(f, "active"),
            IssueState::Terminal => write!(f, "terminal"),
            IssueState::Other => write!(f, "other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_buckets() {
        assert_eq!(IssueState::from_label("In Progress"), IssueState::Active);
        assert_eq!(IssueState::from_label("in progress"), IssueState::Active);
        assert_eq!(IssueState::from_label("Done"), IssueState::Terminal);
        assert_eq!(IssueState::from_label("To Do"), IssueState::Other);
        assert_eq!(IssueState::from_label("In Review"), IssueState::Other);
        assert_eq!(IssueState::from_label(""), IssueState::Other);
    }

    #[test]
    fn test_issue_state_accessor() {
        let issue = Issue::new("PROJ-1", "Fix login", "In Progress");
        assert_eq!(issue.state(), IssueState::Active);
    }
}
