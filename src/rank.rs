//! Priority ordering of classified reports.

use crate::model::MemberReport;

/// Order reports so attention-needing members surface first:
/// AVAILABLE, GHOST WORKER, STUCK, then Standard.
///
/// The sort is stable, so ties keep their original relative order and
/// re-running with unchanged inputs yields identical output.
pub fn rank(reports: &mut [MemberReport]) {
    reports.sort_by_key(|r| r.status.priority());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Member, Status};

    fn report(name: &str, status: Status) -> MemberReport {
        MemberReport {
            member: Member::new(name, format!("{}@example.com", name.to_lowercase())),
            status,
            issues: Vec::new(),
            last_commit: None,
        }
    }

    fn names(reports: &[MemberReport]) -> Vec<&str> {
        reports.iter().map(|r| r.member.name.as_str()).collect()
    }

    #[test]
    fn test_priority_order() {
        let mut reports = vec![
            report("Standard Stan", Status::Standard),
            report("Stuck Sue", Status::Stuck),
            report("Ghost Gwen", Status::GhostWorker),
            report("Available Ann", Status::Available),
        ];
        rank(&mut reports);
        assert_eq!(
            names(&reports),
            vec!["Available Ann", "Ghost Gwen", "Stuck Sue", "Standard Stan"]
        );
    }

    #[test]
    fn test_ties_keep_original_order() {
        let mut reports = vec![
            report("A", Status::Stuck),
            report("B", Status::Available),
            report("C", Status::Stuck),
            report("D", Status::Available),
        ];
        rank(&mut reports);
        assert_eq!(names(&reports), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_rerank_is_idempotent() {
        let mut reports = vec![
            report("A", Status::Standard),
            report("B", Status::GhostWorker),
            report("C", Status::Standard),
        ];
        rank(&mut reports);
        let once = names(&reports).into_iter().map(String::from).collect::<Vec<_>>();
        rank(&mut reports);
        assert_eq!(names(&reports), once);
    }
}
