use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{TempCsv, fixture};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_email_domains"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("email_domains"));
}

#[test]
fn missing_input_is_a_usage_error() {
    bin().assert().code(2);
}

#[test]
fn lists_fixture_domains() {
    bin()
        .arg(fixture("customers.csv"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Listing entries:\n"))
        .stdout(predicate::str::contains("  - Example.com: 7\n"))
        .stdout(predicate::str::contains("  - umbrella.co.uk: 11\n"));
}

#[test]
fn file_flag_and_json_format() {
    bin()
        .arg("--file")
        .arg(fixture("customers.csv"))
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"entries\""))
        .stdout(predicate::str::contains("\"customers\": 60"));
}

#[test]
fn summary_is_appended() {
    bin()
        .arg(fixture("customers.csv"))
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary:"))
        .stdout(predicate::str::is_match(r"domains:\s+7").unwrap());
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.csv");

    bin()
        .arg(fixture("customers.csv"))
        .args(["--format", "csv", "-o"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("domain,count\nExample.com,7\n"));
}

#[test]
fn missing_file_exits_with_not_found() {
    let dir = tempfile::tempdir().unwrap();
    bin()
        .arg(dir.path().join("absent.csv"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("absent.csv"));
}

#[test]
fn email_without_at_sign_exits_with_invalid_domain() {
    bin()
        .arg(fixture("invalid_domain.csv"))
        .assert()
        .code(8)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("bortiz1cyberchimps.com"));
}

#[test]
fn ragged_rows_exit_as_malformed() {
    bin().arg(fixture("invalid_csv.csv")).assert().code(5);
}

#[test]
fn unterminated_quote_exits_as_malformed() {
    let csv = TempCsv::new("id,name,email\n1,a,\"a@x.com\n2,b,b@y.com\n");
    bin()
        .arg(csv.path())
        .assert()
        .code(5)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("never closed"));
}

#[test]
fn empty_file_exits_with_empty_input() {
    let csv = TempCsv::new("");
    bin().arg(csv.path()).assert().code(6);
}

#[test]
fn custom_column_and_header_label() {
    let csv = TempCsv::new("Mail,id\na@x.io,1\nb@y.io,2\nc@x.io,3\n");
    bin()
        .arg(csv.path())
        .args(["--email-column", "0", "--header-label", "Mail"])
        .assert()
        .success()
        .stdout("Listing entries:\n  - x.io: 2\n  - y.io: 1\n");
}
