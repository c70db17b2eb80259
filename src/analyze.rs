//! The full classification pipeline.
//!
//! One pass = aggregate each member, classify, then rank. The reference
//! instant is fixed for the whole pass so every member is compared against
//! the same clock, and no state carries across members or across runs.

use crate::classify::classify;
use crate::model::{Member, MemberReport};
use crate::provider::{CommitProvider, IssueProvider};
use crate::rank::rank;
use crate::signal::aggregate;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Classify the whole team against one reference instant and return the
/// reports in priority order.
pub fn analyze_team(
    members: &[Member],
    issue_provider: &dyn IssueProvider,
    commit_provider: &dyn CommitProvider,
    reference: DateTime<Utc>,
) -> Vec<MemberReport> {
    let mut reports: Vec<MemberReport> = members
        .iter()
        .map(|member| {
            let agg = aggregate(member, issue_provider, commit_provider, reference);
            let status = classify(&agg.signals);
            debug!(member = %member.email, %status, "classified");
            MemberReport {
                member: member.clone(),
                status,
                issues: agg.issues,
                last_commit: agg.last_commit,
            }
        })
        .collect();

    rank(&mut reports);
    reports
}
