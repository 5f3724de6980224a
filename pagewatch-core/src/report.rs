// Report rendering for registered pages and their check history

use crate::data::{CheckRecord, UrlRecord, UrlSummary};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Text report for one page: registration info plus its check history,
/// newest check first.
pub fn generate_url_report(url: &UrlRecord, checks: &[CheckRecord]) -> String {
    let mut report = String::new();

    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str(&format!("# {}\n", url.name));
    report.push_str(&format!("  Id:         {}\n", url.id));
    report.push_str(&format!("  Registered: {}\n", format_timestamp(url.created_at)));
    report.push_str(&format!("  Checks:     {}\n", checks.len()));
    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    if checks.is_empty() {
        report.push_str("  No checks yet. Run `pagewatch check` to record one.\n");
        return report;
    }

    for check in checks {
        report.push_str(&format!(
            "  {} {}\n",
            colorize_status(check.status_code),
            format_timestamp(check.created_at)
        ));
        report.push_str(&format!("    h1:          {}\n", field_or_dash(&check.h1)));
        report.push_str(&format!("    title:       {}\n", field_or_dash(&check.title)));
        report.push_str(&format!(
            "    description: {}\n",
            field_or_dash(&check.description)
        ));
        report.push('\n');
    }

    report
}

/// Text listing of every registered page with its newest check.
pub fn generate_listing_report(summaries: &[UrlSummary]) -> String {
    let mut report = String::new();

    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str(&format!("# Registered pages: {}\n\n", summaries.len()));

    for summary in summaries {
        let last_check = match (summary.last_status_code, summary.last_check_at) {
            (Some(status), Some(at)) => {
                format!("{} {}", colorize_status(status), format_timestamp(at))
            }
            _ => "never checked".to_string(),
        };

        report.push_str(&format!("  [{}] {}\n", summary.id, summary.name));
        report.push_str(&format!("      last check: {}\n", last_check));
    }

    report
}

pub fn generate_url_json(
    url: &UrlRecord,
    checks: &[CheckRecord],
) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "generator": "pagewatch",
        "version": env!("CARGO_PKG_VERSION"),
        "url": {
            "id": url.id,
            "name": url.name,
            "created_at": format_iso8601_timestamp(url.created_at),
        },
        "checks": checks.iter().map(|check| {
            serde_json::json!({
                "id": check.id,
                "status_code": check.status_code,
                "h1": check.h1,
                "title": check.title,
                "description": check.description,
                "created_at": format_iso8601_timestamp(check.created_at),
            })
        }).collect::<Vec<_>>(),
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn generate_listing_json(summaries: &[UrlSummary]) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "generator": "pagewatch",
        "version": env!("CARGO_PKG_VERSION"),
        "urls": summaries.iter().map(|summary| {
            serde_json::json!({
                "id": summary.id,
                "name": summary.name,
                "created_at": format_iso8601_timestamp(summary.created_at),
                "last_check_at": summary.last_check_at.map(format_iso8601_timestamp),
                "last_status_code": summary.last_status_code,
            })
        }).collect::<Vec<_>>(),
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

// Helper functions

fn field_or_dash(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("-")
}

fn colorize_status(status_code: u16) -> String {
    match status_code {
        100..=199 => format!("\x1b[37m{}\x1b[0m", status_code), // White
        200..=299 => format!("\x1b[32m{}\x1b[0m", status_code), // Green
        300..=399 => format!("\x1b[36m{}\x1b[0m", status_code), // Cyan
        400..=499 => format!("\x1b[33m{}\x1b[0m", status_code), // Orange/Yellow
        500..=599 => format!("\x1b[31m{}\x1b[0m", status_code), // Red
        _ => format!("{}", status_code),
    }
}

fn format_timestamp(timestamp: i64) -> String {
    use chrono::{DateTime, Utc};
    let datetime = DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap_or_else(Utc::now);
    datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn format_iso8601_timestamp(timestamp: i64) -> String {
    use chrono::{DateTime, Utc};
    let datetime = DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap_or_else(Utc::now);
    datetime.to_rfc3339()
}
