use crate::config::Settings;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pagewatch_checker::PageChecker;
use pagewatch_core::data::Database;
use pagewatch_core::registry::{self, RegisterOutcome, RegistryError};
use pagewatch_core::report::{
    ReportFormat, generate_listing_json, generate_listing_report, generate_url_json,
    generate_url_report, save_report,
};
use std::path::PathBuf;
use std::time::Duration;

/// Open (creating if needed) the database named by the settings.
pub fn open_database(settings: &Settings) -> Result<Database, String> {
    if let Some(parent) = settings.database.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }

    Database::new(&settings.database)
        .map_err(|e| format!("Failed to open database {}: {}", settings.database.display(), e))
}

pub fn handle_init(settings: &Settings, force: bool) -> Result<(), String> {
    if Database::exists(&settings.database) {
        if !force {
            return Err(format!(
                "Database already exists at {} (use --force to recreate)",
                settings.database.display()
            ));
        }
        Database::drop(&settings.database);
    }

    open_database(settings)?;
    println!(
        "{} Database ready at {}",
        "✓".green().bold(),
        settings.database.display().to_string().bright_white()
    );
    Ok(())
}

pub fn handle_add(settings: &Settings, raw: Option<&str>) -> Result<(), String> {
    let db = open_database(settings)?;

    match registry::register_url(&db, raw) {
        Ok(RegisterOutcome::Created(record)) => {
            println!(
                "{} Page added: [{}] {}",
                "✓".green().bold(),
                record.id,
                record.name.bright_white()
            );
            Ok(())
        }
        Ok(RegisterOutcome::Existing(record)) => {
            println!(
                "{} Page already exists: [{}] {}",
                "•".yellow().bold(),
                record.id,
                record.name.bright_white()
            );
            Ok(())
        }
        Err(RegistryError::Validation(reason)) => Err(reason.to_string()),
        Err(err) => Err(err.to_string()),
    }
}

pub fn handle_list(
    settings: &Settings,
    format: &ReportFormat,
    output: Option<&PathBuf>,
) -> Result<(), String> {
    let db = open_database(settings)?;
    let summaries = db.list_urls().map_err(|e| e.to_string())?;

    let report = match format {
        ReportFormat::Text => generate_listing_report(&summaries),
        ReportFormat::Json => generate_listing_json(&summaries).map_err(|e| e.to_string())?,
    };

    emit_report(&report, output)
}

pub fn handle_show(
    settings: &Settings,
    url_id: i64,
    format: &ReportFormat,
    output: Option<&PathBuf>,
) -> Result<(), String> {
    let db = open_database(settings)?;

    let url = db
        .get_url_by_id(url_id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("No URL with id {}", url_id))?;
    let checks = db.get_checks_by_url(url_id).map_err(|e| e.to_string())?;

    let report = match format {
        ReportFormat::Text => generate_url_report(&url, &checks),
        ReportFormat::Json => generate_url_json(&url, &checks).map_err(|e| e.to_string())?,
    };

    emit_report(&report, output)
}

pub async fn handle_check(
    settings: &Settings,
    url_id: i64,
    timeout_secs: u64,
) -> Result<(), String> {
    let db = open_database(settings)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Checking url {}...", url_id));

    let checker = PageChecker::with_timeout(timeout_secs);
    let outcome = registry::run_check(&db, &checker, url_id).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(Some(record)) => {
            println!(
                "{} Page checked (status {})",
                "✓".green().bold(),
                record.status_code
            );
            println!("    h1:          {}", record.h1.as_deref().unwrap_or("-"));
            println!("    title:       {}", record.title.as_deref().unwrap_or("-"));
            println!(
                "    description: {}",
                record.description.as_deref().unwrap_or("-")
            );
            Ok(())
        }
        // The failure kind stays inside the pipeline; the user gets a
        // generic notice either way.
        Ok(None) => Err("Check failed".to_string()),
        Err(RegistryError::UnknownUrl(id)) => Err(format!("No URL with id {}", id)),
        Err(err) => Err(err.to_string()),
    }
}

fn emit_report(report: &str, output: Option<&PathBuf>) -> Result<(), String> {
    match output {
        Some(path) => {
            save_report(report, path)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            println!(
                "{} Report saved to {}",
                "✓".green().bold(),
                path.display().to_string().bright_white()
            );
            Ok(())
        }
        None => {
            print!("{}", report);
            Ok(())
        }
    }
}
