//! ISO-8601 timestamp normalization.
//!
//! Commit timestamps arrive from several sources in slightly different
//! shapes: with an explicit offset, with a trailing `Z`, or with no zone at
//! all. Not every parser accepts the `Z` suffix, so normalization is an
//! explicit step here instead of a library default. Everything comes out as
//! a UTC instant or a `Parse` error; there are no silent fallbacks.

use crate::error::{Result, StandupError};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Parse an ISO-8601 timestamp string into a UTC instant.
///
/// Accepted shapes:
/// - `YYYY-MM-DDTHH:MM:SS[.ffffff]±HH:MM` (explicit offset)
/// - `YYYY-MM-DDTHH:MM:SS[.ffffff]Z` (UTC)
/// - `YYYY-MM-DDTHH:MM:SS[.ffffff]` (no zone, read as UTC)
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Zone-less timestamps are read as UTC.
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| StandupError::Parse(format!("Invalid timestamp: {:?}", raw)))
}

/// Format a UTC instant as ISO-8601 with a trailing `Z`.
///
/// Fractional seconds are emitted only when present, so formatting and
/// re-parsing always yields the same instant.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
