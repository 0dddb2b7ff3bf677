// tests/integration/output_formats.rs
use email_domains::{Config, DomainReport, options::OutputFormat, presentation, run};
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{CUSTOMERS_EXPECTED, fixture};

fn fixture_report() -> DomainReport {
    run(&Config::for_input(fixture("customers.csv"))).expect("fixture parses")
}

#[test]
fn text_output_lists_every_domain() {
    let text = presentation::render(&fixture_report(), OutputFormat::Text, false).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Listing entries:"));
    let expected: Vec<String> = CUSTOMERS_EXPECTED.iter().map(|(d, c)| format!("  - {d}: {c}")).collect();
    assert_eq!(lines.map(str::to_owned).collect::<Vec<_>>(), expected);
}

#[test]
fn json_output_is_ordered_and_totalled() {
    let json = presentation::render(&fixture_report(), OutputFormat::Json, false).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let domains: Vec<&str> = value["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["domain"].as_str().unwrap())
        .collect();
    let expected: Vec<&str> = CUSTOMERS_EXPECTED.iter().map(|(d, _)| *d).collect();
    assert_eq!(domains, expected);
    assert_eq!(value["customers"], 60);
    assert_eq!(value["header_rows"], 1);
}

#[test]
fn csv_output_has_header_and_one_row_per_domain() {
    let csv = presentation::render(&fixture_report(), OutputFormat::Csv, false).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("domain,count"));
    assert_eq!(lines.next(), Some("Example.com,7"));
    assert_eq!(lines.count(), CUSTOMERS_EXPECTED.len() - 1);
}

#[test]
fn emit_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("report.yaml");
    let mut config = Config::for_input(fixture("customers.csv"));
    config.format = OutputFormat::Yaml;
    config.output = Some(target.clone());

    presentation::emit(&fixture_report(), &config).unwrap();

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.contains("domain: acme.io"));
    assert!(written.contains("customers: 60"));
}
