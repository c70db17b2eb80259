use super::CommandContext;
use crate::timestamp;
use anyhow::Result;
use colored::Colorize;

/// Parameters for the commits probe
pub struct CommitsParams {
    pub email: String,
    pub json: bool,
}

pub fn handle_commits(ctx: &CommandContext, params: CommitsParams) -> Result<()> {
    let sources = ctx.sources()?;
    let timestamps = sources
        .commit_provider()
        .fetch_commit_timestamps(&params.email)?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&timestamps)?);
        return Ok(());
    }

    if timestamps.is_empty() {
        println!("No commit records found for {}", params.email);
        return Ok(());
    }

    for raw in &timestamps {
        match timestamp::parse_instant(raw) {
            Ok(instant) => println!("- {}", timestamp::format_instant(instant)),
            Err(_) => println!("- {} {}", raw, "(unparseable)".red()),
        }
    }
    Ok(())
}
