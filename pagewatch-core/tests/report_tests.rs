// Tests for report rendering

use pagewatch_core::data::{CheckRecord, UrlRecord, UrlSummary};
use pagewatch_core::report::{
    ReportFormat, generate_listing_json, generate_listing_report, generate_url_json,
    generate_url_report, save_report,
};

fn sample_url() -> UrlRecord {
    UrlRecord {
        id: 1,
        name: "https://example.com".to_string(),
        created_at: 1_700_000_000,
    }
}

fn sample_check(id: i64, status_code: u16) -> CheckRecord {
    CheckRecord {
        id,
        url_id: 1,
        status_code,
        h1: Some("Welcome".to_string()),
        title: Some("Home".to_string()),
        description: None,
        created_at: 1_700_000_100,
    }
}

#[test]
fn test_report_format_from_str() {
    assert!(matches!(
        ReportFormat::from_str("text"),
        Some(ReportFormat::Text)
    ));
    assert!(matches!(
        ReportFormat::from_str("JSON"),
        Some(ReportFormat::Json)
    ));
    assert!(ReportFormat::from_str("csv").is_none());
}

#[test]
fn test_url_report_contains_name_and_fields() {
    let url = sample_url();
    let checks = vec![sample_check(1, 200)];

    let report = generate_url_report(&url, &checks);

    assert!(report.contains("https://example.com"));
    assert!(report.contains("200"));
    assert!(report.contains("Welcome"));
    assert!(report.contains("Home"));
    assert!(report.contains("Checks:     1"));
    // Absent description renders as a placeholder, not as an empty slot.
    assert!(report.contains("description: -"));
}

#[test]
fn test_url_report_without_checks_mentions_it() {
    let report = generate_url_report(&sample_url(), &[]);
    assert!(report.contains("No checks yet"));
}

#[test]
fn test_status_codes_are_color_coded() {
    let url = sample_url();
    let checks = vec![sample_check(1, 200), sample_check(2, 404), sample_check(3, 503)];

    let report = generate_url_report(&url, &checks);

    assert!(report.contains("\x1b[32m200\x1b[0m"));
    assert!(report.contains("\x1b[33m404\x1b[0m"));
    assert!(report.contains("\x1b[31m503\x1b[0m"));
}

#[test]
fn test_listing_report_shows_every_page() {
    let summaries = vec![
        UrlSummary {
            id: 2,
            name: "https://two.example".to_string(),
            created_at: 1_700_000_050,
            last_check_at: Some(1_700_000_100),
            last_status_code: Some(200),
        },
        UrlSummary {
            id: 1,
            name: "https://one.example".to_string(),
            created_at: 1_700_000_000,
            last_check_at: None,
            last_status_code: None,
        },
    ];

    let report = generate_listing_report(&summaries);

    assert!(report.contains("Registered pages: 2"));
    assert!(report.contains("[2] https://two.example"));
    assert!(report.contains("[1] https://one.example"));
    assert!(report.contains("never checked"));
}

#[test]
fn test_url_json_round_trips() {
    let url = sample_url();
    let checks = vec![sample_check(1, 200)];

    let json = generate_url_json(&url, &checks).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["generator"], "pagewatch");
    assert_eq!(value["url"]["name"], "https://example.com");
    assert_eq!(value["checks"][0]["status_code"], 200);
    assert_eq!(value["checks"][0]["h1"], "Welcome");
    assert!(value["checks"][0]["description"].is_null());
}

#[test]
fn test_listing_json_round_trips() {
    let summaries = vec![UrlSummary {
        id: 1,
        name: "https://example.com".to_string(),
        created_at: 1_700_000_000,
        last_check_at: None,
        last_status_code: None,
    }];

    let json = generate_listing_json(&summaries).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["urls"][0]["id"], 1);
    assert!(value["urls"][0]["last_check_at"].is_null());
}

#[test]
fn test_save_report_writes_the_file() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("report.txt");

    save_report("report body\n", &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "report body\n");
}
