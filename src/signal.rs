//! Per-member signal aggregation.
//!
//! Pulls raw records from the two providers and reduces them to the three
//! flags the classifier consumes. Failures degrade per member: a provider
//! error means empty data for that member, a malformed timestamp drops that
//! single record. Nothing here ever aborts the run.

use crate::model::{Issue, IssueState, Member};
use crate::provider::{CommitProvider, IssueProvider};
use crate::timestamp;
use chrono::{DateTime, TimeDelta, Utc};
use tracing::warn;

/// The reduced signal tuple for one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signals {
    /// Any issue in the active bucket.
    pub has_active_issue: bool,

    /// Issue set is non-empty and every issue is terminal.
    pub all_issues_terminal: bool,

    /// Reference instant minus the latest valid commit; `None` when no valid
    /// commit exists. Absence is treated as larger than any threshold, so it
    /// is an explicit option rather than a magic large duration.
    pub elapsed_since_last_commit: Option<TimeDelta>,
}

/// Everything the pipeline needs downstream of one member's aggregation:
/// the signals for the classifier plus the raw issues and latest commit
/// instant for display.
#[derive(Debug, Clone)]
pub struct Aggregate {
    pub issues: Vec<Issue>,
    pub last_commit: Option<DateTime<Utc>>,
    pub signals: Signals,
}

/// Aggregate one member's signals against a fixed reference instant.
pub fn aggregate(
    member: &Member,
    issue_provider: &dyn IssueProvider,
    commit_provider: &dyn CommitProvider,
    reference: DateTime<Utc>,
) -> Aggregate {
    let issues = issue_provider.fetch_issues(&member.email).unwrap_or_else(|e| {
        warn!(member = %member.email, error = %e, "issue provider failed, treating as no data");
        Vec::new()
    });

    let raw_timestamps = commit_provider
        .fetch_commit_timestamps(&member.email)
        .unwrap_or_else(|e| {
            warn!(member = %member.email, error = %e, "commit provider failed, treating as no data");
            Vec::new()
        });

    let last_commit = latest_commit(&member.email, &raw_timestamps);

    let has_active_issue = issues.iter().any(|i| i.state() == IssueState::Active);
    let all_issues_terminal =
        !issues.is_empty() && issues.iter().all(|i| i.state() == IssueState::Terminal);

    Aggregate {
        issues,
        last_commit,
        signals: Signals {
            has_active_issue,
            all_issues_terminal,
            elapsed_since_last_commit: last_commit.map(|commit| reference - commit),
        },
    }
}

/// Reduce raw timestamp strings to the most recent valid instant.
///
/// A record that fails to parse is dropped and logged; one bad record must
/// not disable classification for the whole member.
fn latest_commit(email: &str, raw_timestamps: &[String]) -> Option<DateTime<Utc>> {
    raw_timestamps
        .iter()
        .filter_map(|raw| match timestamp::parse_instant(raw) {
            Ok(instant) => Some(instant),
            Err(e) => {
                warn!(member = %email, record = %raw, error = %e, "dropping malformed commit timestamp");
                None
            }
        })
        .max()
}
