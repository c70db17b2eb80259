use super::{Issue, Member};
use crate::error::{Result, StandupError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The classification assigned to one member for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Active issue on the board, but no commit for over 3 days.
    Stuck,
    /// Everything assigned is done and a commit landed within 24h.
    Available,
    /// Nothing in progress on the board, yet commits within 24h.
    GhostWorker,
    /// The unremarkable rest.
    #[default]
    Standard,
}

impl Status {
    /// Sort key for the report: attention-needing members first.
    pub fn priority(&self) -> u8 {
        match self {
            Status::Available => 0,
            Status::GhostWorker => 1,
            Status::Stuck => 2,
            Status::Standard => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Stuck => write!(f, "STUCK"),
            Status::Available => write!(f, "AVAILABLE"),
            Status::GhostWorker => write!(f, "GHOST WORKER"),
            Status::Standard => write!(f, "Standard"),
        }
    }
}

impl FromStr for Status {
    type Err = StandupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "stuck" => Ok(Status::Stuck),
            "available" => Ok(Status::Available),
            "ghost worker" | "ghost-worker" | "ghost_worker" => Ok(Status::GhostWorker),
            "standard" => Ok(Status::Standard),
            _ => Err(StandupError::Parse(format!("Invalid status: {}", s))),
        }
    }
}

/// One member's classified snapshot, ready for display.
///
/// Created once per classification pass and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberReport {
    #[serde(flatten)]
    pub member: Member,

    pub status: Status,

    pub issues: Vec<Issue>,

    /// Most recent valid commit instant, if any record survived parsing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_commit: Option<DateTime<Utc>>,
}
