//! The status decision list.
//!
//! Classification is a fixed-priority list of (predicate, status) pairs,
//! evaluated top-down with first match winning. The order is load-bearing:
//! an all-done member with a fresh commit satisfies both the AVAILABLE and
//! GHOST WORKER predicates, and must come out AVAILABLE.

use crate::model::Status;
use crate::signal::Signals;
use chrono::TimeDelta;

/// An active issue older than this without a commit means STUCK.
const STALL_HOURS: i64 = 72;

/// A commit within this window counts as "just shipped".
const RECENCY_HOURS: i64 = 24;

type Predicate = fn(&Signals) -> bool;

const RULES: [(Predicate, Status); 3] = [
    (is_stuck, Status::Stuck),
    (is_available, Status::Available),
    (is_ghost_worker, Status::GhostWorker),
];

/// Map one member's signals to exactly one status.
///
/// Total and side-effect free: every signal combination maps to a status,
/// with [`Status::Standard`] as the fallback.
pub fn classify(signals: &Signals) -> Status {
    RULES
        .iter()
        .find(|(matches, _)| matches(signals))
        .map(|(_, status)| *status)
        .unwrap_or(Status::Standard)
}

fn is_stuck(s: &Signals) -> bool {
    s.has_active_issue && exceeds(s.elapsed_since_last_commit, TimeDelta::hours(STALL_HOURS))
}

fn is_available(s: &Signals) -> bool {
    s.all_issues_terminal && within(s.elapsed_since_last_commit, TimeDelta::hours(RECENCY_HOURS))
}

fn is_ghost_worker(s: &Signals) -> bool {
    !s.has_active_issue && within(s.elapsed_since_last_commit, TimeDelta::hours(RECENCY_HOURS))
}

/// Strictly greater than the limit; no commit at all counts as unbounded.
fn exceeds(elapsed: Option<TimeDelta>, limit: TimeDelta) -> bool {
    elapsed.is_none_or(|e| e > limit)
}

/// Strictly less than the limit; no commit at all never qualifies.
fn within(elapsed: Option<TimeDelta>, limit: TimeDelta) -> bool {
    elapsed.is_some_and(|e| e < limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(
        has_active_issue: bool,
        all_issues_terminal: bool,
        elapsed: Option<TimeDelta>,
    ) -> Signals {
        Signals {
            has_active_issue,
            all_issues_terminal,
            elapsed_since_last_commit: elapsed,
        }
    }

    #[test]
    fn test_stuck_active_issue_stale_commit() {
        // One "In Progress" issue, last commit 5 days ago
        let s = signals(true, false, Some(TimeDelta::days(5)));
        assert_eq!(classify(&s), Status::Stuck);
    }

    #[test]
    fn test_available_all_done_fresh_commit() {
        // Two "Done" issues, last commit 2 hours ago
        let s = signals(false, true, Some(TimeDelta::hours(2)));
        assert_eq!(classify(&s), Status::Available);
    }

    #[test]
    fn test_ghost_worker_no_issues_fresh_commit() {
        // Zero issues, last commit 1 hour ago
        let s = signals(false, false, Some(TimeDelta::hours(1)));
        assert_eq!(classify(&s), Status::GhostWorker);
    }

    #[test]
    fn test_standard_no_issues_no_commits() {
        let s = signals(false, false, None);
        assert_eq!(classify(&s), Status::Standard);
    }

    #[test]
    fn test_stuck_with_no_commit_at_all() {
        // Unbounded elapsed is larger than any threshold
        let s = signals(true, false, None);
        assert_eq!(classify(&s), Status::Stuck);
    }

    #[test]
    fn test_exact_stall_boundary_is_standard() {
        // Strictly greater than 3 days, so exactly 3 days falls through
        let s = signals(true, false, Some(TimeDelta::hours(72)));
        assert_eq!(classify(&s), Status::Standard);

        let s = signals(true, false, Some(TimeDelta::hours(72) + TimeDelta::seconds(1)));
        assert_eq!(classify(&s), Status::Stuck);
    }

    #[test]
    fn test_exact_recency_boundary_is_standard() {
        // Strictly less than 24h, so exactly 24h falls through
        let s = signals(false, true, Some(TimeDelta::hours(24)));
        assert_eq!(classify(&s), Status::Standard);

        let s = signals(false, true, Some(TimeDelta::hours(24) - TimeDelta::seconds(1)));
        assert_eq!(classify(&s), Status::Available);
    }

    #[test]
    fn test_available_wins_over_ghost_worker() {
        // All-done with a fresh commit satisfies both predicates; the list
        // order decides
        let s = signals(false, true, Some(TimeDelta::hours(2)));
        assert!(is_available(&s));
        assert!(is_ghost_worker(&s));
        assert_eq!(classify(&s), Status::Available);
    }

    #[test]
    fn test_active_issue_with_recent_commit_is_standard() {
        let s = signals(true, false, Some(TimeDelta::hours(3)));
        assert_eq!(classify(&s), Status::Standard);
    }

    #[test]
    fn test_total_over_flag_grid() {
        // Every flag combination maps to exactly one status at every
        // representative elapsed value; classify never panics or skips
        let elapsed_cases = [
            None,
            Some(TimeDelta::hours(1)),
            Some(TimeDelta::hours(24)),
            Some(TimeDelta::hours(48)),
            Some(TimeDelta::hours(72)),
            Some(TimeDelta::days(10)),
            Some(TimeDelta::hours(-1)),
        ];
        for active in [false, true] {
            for terminal in [false, true] {
                for elapsed in elapsed_cases {
                    let s = signals(active, terminal, elapsed);
                    let first = classify(&s);
                    assert_eq!(classify(&s), first, "classification must be deterministic");
                }
            }
        }
    }
}
