use crate::config::{CONFIG_FILE, StandupConfig};
use crate::error::StandupError;
use anyhow::{Context, Result};
use colored::Colorize;

const SAMPLE_ROSTER: &str = r#"{
  "users": [
    {
      "name": "Alice Example",
      "email": "alice@example.com",
      "note": "migrating the billing service",
      "jira_issues": [
        {"key": "BILL-3", "summary": "Migrate billing schema", "status": "In Progress"}
      ],
      "commit_timestamps": ["2026-01-07T12:15:00Z"]
    },
    {
      "name": "Bob Example",
      "email": "bob@example.com",
      "note": "",
      "jira_issues": [
        {"key": "WEB-1", "summary": "Ship the new banner", "status": "Done"}
      ],
      "last_commit_timestamp": "2026-01-12T10:15:00"
    }
  ]
}
"#;

pub fn handle_init(team_file: String) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config_path = cwd.join(CONFIG_FILE);

    if config_path.exists() {
        return Err(StandupError::AlreadyInitialized(cwd.display().to_string()).into());
    }

    let mut config = StandupConfig::default();
    config.providers.team_file = team_file.clone();
    config
        .save(&config_path)
        .context("Failed to write config file")?;

    // Only seed a sample roster if none exists yet
    let roster_path = cwd.join(&team_file);
    if !roster_path.exists() {
        std::fs::write(&roster_path, SAMPLE_ROSTER)
            .with_context(|| format!("Failed to write {}", roster_path.display()))?;
        println!(
            "{} sample roster {}",
            "Created".green(),
            team_file.cyan()
        );
    }

    println!(
        "{} standup project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("Edit {} and run 'standup report'.", team_file.cyan());
    Ok(())
}
