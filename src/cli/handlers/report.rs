use super::CommandContext;
use super::utils::print_report;
use crate::analyze::analyze_team;
use crate::timestamp;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

/// Parameters for the report operation
pub struct ReportParams {
    pub at: Option<String>,
    pub json: bool,
}

pub fn handle_report(ctx: &CommandContext, params: ReportParams) -> Result<()> {
    // One reference instant for the whole pass
    let reference: DateTime<Utc> = match params.at {
        Some(raw) => timestamp::parse_instant(&raw)
            .with_context(|| format!("Invalid --at instant: {}", raw))?,
        None => Utc::now(),
    };

    let sources = ctx.sources()?;
    let members = sources.members();
    let reports = analyze_team(
        &members,
        sources.issue_provider(),
        sources.commit_provider(),
        reference,
    );

    if params.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_report(&reports);
    }
    Ok(())
}
