//! # Standup - a CLI team-status analyst
//!
//! Standup correlates two independent activity signals per team member — open
//! issues in the tracker and commit recency in version control — and surfaces
//! an actionable classification for a manager: who is stuck, who is free, who
//! is quietly shipping work nobody tracked.
//!
//! ## Statuses
//!
//! - **STUCK**: has an in-progress issue but no commit for more than 3 days
//! - **AVAILABLE**: everything assigned is done and a commit landed within 24h
//! - **GHOST WORKER**: nothing in progress on the board, yet commits within 24h
//! - **Standard**: everything else
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default config and sample roster
//! standup init
//!
//! # Classify the team against the current time
//! standup report
//!
//! # Classify against a fixed reference instant, machine-readable
//! standup report --at 2026-01-12T12:15:00Z --json
//!
//! # Probe a single member's raw signals
//! standup issues alice@example.com
//! standup commits alice@example.com
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (Member, Issue, Status, MemberReport)
//! - [`provider`]: Issue and commit data providers (mock file or live APIs)
//! - [`timestamp`]: ISO-8601 timestamp normalization
//! - [`signal`]: Per-member signal aggregation
//! - [`classify`]: The status decision list
//! - [`rank`]: Priority ordering of the classified team
//! - [`analyze`]: The full classification pipeline

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.standup.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `StandupError` enum and `Result<T>` type alias.
pub mod error;

/// Data models.
///
/// Includes `Member`, `Issue`, `IssueState`, `Status`, and `MemberReport`.
pub mod model;

/// Issue and commit data providers.
///
/// Capability traits plus the mock roster file, Jira, and GitHub backends.
pub mod provider;

/// Timestamp normalization.
///
/// Parses ISO-8601 strings (with or without a trailing `Z`) into UTC instants.
pub mod timestamp;

/// Per-member signal aggregation.
///
/// Reduces raw provider records to the flags the classifier consumes.
pub mod signal;

/// The status decision list.
pub mod classify;

/// Priority ordering of classified reports.
pub mod rank;

/// The full classification pipeline: aggregate, classify, rank.
pub mod analyze;

pub mod logging;
