use super::CommandContext;
use anyhow::Result;
use colored::Colorize;

/// Parameters for the issues probe
pub struct IssuesParams {
    pub email: String,
    pub json: bool,
}

pub fn handle_issues(ctx: &CommandContext, params: IssuesParams) -> Result<()> {
    let sources = ctx.sources()?;
    let issues = sources.issue_provider().fetch_issues(&params.email)?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
        return Ok(());
    }

    if issues.is_empty() {
        println!("No issues found for {}", params.email);
        return Ok(());
    }

    for issue in &issues {
        println!("- [{}] {} ({})", issue.key.cyan(), issue.summary, issue.status);
    }
    Ok(())
}
