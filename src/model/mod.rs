mod issue;
mod member;
mod report;

pub use issue::{Issue, IssueState};
pub use member::Member;
pub use report::{MemberReport, Status};
