use crate::model::{MemberReport, Status};
use crate::timestamp;
use colored::Colorize;

/// Print the ranked team report as an aligned table
pub fn print_report(reports: &[MemberReport]) {
    if reports.is_empty() {
        println!("No team members found.");
        return;
    }

    // Pad before coloring so escape codes don't break the alignment
    let header = format!(
        "{:<25} | {:<15} | {:<22} | {}",
        "Name", "Status", "Last commit", "Note"
    );
    println!("{}", header.bold());
    println!("{}", "-".repeat(80));

    for report in reports {
        let status = format!("{:<15}", report.status.to_string());
        let status = match report.status {
            Status::Stuck => status.red().bold(),
            Status::Available => status.green(),
            Status::GhostWorker => status.yellow(),
            Status::Standard => status.white(),
        };
        let last_commit = format!(
            "{:<22}",
            report
                .last_commit
                .map(timestamp::format_instant)
                .unwrap_or_else(|| "N/A".to_string())
        );

        println!(
            "{:<25} | {} | {} | {}",
            report.member.name,
            status,
            last_commit.dimmed(),
            report.member.note
        );
    }
}
