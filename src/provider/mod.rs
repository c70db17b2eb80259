//! Data providers for the two activity signals.
//!
//! The aggregator only sees these two capability traits; whether the data
//! comes from a roster file on disk or a live API is wired up at the CLI
//! edge, never branched on inside the pipeline.

mod github;
mod jira;
mod mock;

pub use github::GithubProvider;
pub use jira::JiraProvider;
pub use mock::MockRoster;

use crate::error::Result;
use crate::model::Issue;

/// Source of tracker issues for one identity.
///
/// An unknown identity yields `Ok(vec![])`; errors are reserved for
/// transport or auth failures.
pub trait IssueProvider {
    fn fetch_issues(&self, email: &str) -> Result<Vec<Issue>>;
}

/// Source of raw commit timestamp strings for one identity.
///
/// Same contract: "no commits found" is an empty vec, not an error. The
/// strings are unparsed on purpose; normalization happens in the aggregator
/// so one malformed record can be dropped without losing the rest.
pub trait CommitProvider {
    fn fetch_commit_timestamps(&self, email: &str) -> Result<Vec<String>>;
}
