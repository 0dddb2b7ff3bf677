// tests/integration/pipeline.rs
use email_domains::{Config, Entry, ErrorKind, count_domains, count_domains_from_reader, run};

#[path = "../common/mod.rs"]
mod common;
use common::{CUSTOMERS_EXPECTED, TempCsv, fixture};

#[test]
fn counts_fixture_in_domain_order() {
    let entries = count_domains(fixture("customers.csv")).expect("fixture parses");
    let got: Vec<(&str, usize)> = entries.iter().map(|e| (e.domain.as_str(), e.count.value())).collect();
    assert_eq!(got, CUSTOMERS_EXPECTED);
}

#[test]
fn fixture_report_conserves_counts() {
    let report = run(&Config::for_input(fixture("customers.csv"))).unwrap();
    let total: usize = report.entries.iter().map(|e| e.count.value()).sum();
    assert_eq!(report.rows_read, 61);
    assert_eq!(report.header_rows, 1);
    assert_eq!(report.customers, 60);
    assert_eq!(total, report.customers);
}

#[test]
fn three_customer_scenario() {
    let input = "id,name,email\n1,a,a@x.com\n2,b,b@x.com\n3,c,c@y.com\n";
    let entries = count_domains_from_reader(input.as_bytes()).unwrap();
    assert_eq!(entries, vec![Entry::new("x.com", 2usize), Entry::new("y.com", 1usize)]);
}

#[test]
fn invalid_domain_aborts_without_entries() {
    let err = count_domains(fixture("invalid_domain.csv")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDomain);
    assert!(err.to_string().contains("bortiz1cyberchimps.com"), "{err}");
}

#[test]
fn ragged_csv_is_malformed() {
    let err = count_domains(fixture("invalid_csv.csv")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedRecord);
}

#[test]
fn flexible_mode_checks_each_row() {
    let mut config = Config::for_input(fixture("invalid_csv.csv"));
    config.reader.flexible = true;
    // the short row still holds an email column
    let report = run(&config).unwrap();
    assert_eq!(report.customers, 3);

    let csv = TempCsv::new("a,b,email\n1,2,x@y.z\n3,4\n");
    let mut config = Config::for_input(csv.path());
    config.reader.flexible = true;
    let err = run(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidColumnCount);
    assert!(err.to_string().contains("row 3"), "{err}");
}

#[test]
fn missing_file_is_not_found() {
    let err = count_domains("/no/way/this/dir/exists_").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.io_error().map(std::io::Error::kind), Some(std::io::ErrorKind::NotFound));
}

#[test]
fn empty_file_is_empty_input() {
    let csv = TempCsv::new("");
    let err = count_domains(csv.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);
}

#[test]
fn two_column_file_is_invalid_column_count() {
    let csv = TempCsv::new("id,name\n1,a\n");
    let err = count_domains(csv.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidColumnCount);
}

#[test]
fn trailing_at_yields_empty_domain() {
    let entries = count_domains_from_reader("id,name,email\n1,a,a@\n2,b,b@x.com\n".as_bytes()).unwrap();
    assert_eq!(entries, vec![Entry::new("", 1usize), Entry::new("x.com", 1usize)]);
}

#[test]
fn quoted_emails_are_unquoted_before_extraction() {
    let input = "id,name,email\n1,\"Doe, J\",\"j@quoted.org\"\n";
    let entries = count_domains_from_reader(input.as_bytes()).unwrap();
    assert_eq!(entries, vec![Entry::new("quoted.org", 1usize)]);
}

#[test]
fn custom_column_and_header_label() {
    let csv = TempCsv::new("Email,name\nann@x.com,Ann\nbob@x.com,Bob\n");
    let mut config = Config::for_input(csv.path());
    config.aggregation = config.aggregation.clone().with_email_column(0).with_header_label("Email");
    let report = run(&config).unwrap();
    assert_eq!(report.entries, vec![Entry::new("x.com", 2usize)]);
}

#[test]
fn unterminated_quote_is_malformed() {
    let input = "id,name,email\n1,a,\"a@x.com\n2,b,b@y.com\n3,c,c@z.com\n";
    let err = count_domains_from_reader(input.as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedRecord);
    assert!(err.to_string().contains("line 2"), "{err}");
}

#[test]
fn bare_quote_is_malformed() {
    let err = count_domains_from_reader("id,name,email\n1,a\"b,a@x.com\n".as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedRecord);
}
