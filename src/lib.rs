// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

use std::{io::Read, path::Path};

pub mod cli;
pub mod config;
pub mod logging;
pub mod options;
pub mod presentation;

pub use config::Config;
pub use email_domains_domain::{AggregationOptions, Entry};
pub use email_domains_infra::ReaderOptions;
pub use email_domains_shared_kernel::{CustomerCount, EmailDomainsError, ErrorKind, Result};
pub use email_domains_usecase::DomainReport;

use email_domains_infra::{CsvRecordReader, FileReader};
use email_domains_usecase::CountDomains;

/// Counts customers per email domain in the CSV file at `path`.
///
/// Uses the default layout: email in the third column, header rows detected by
/// the value `email`. Entries come back ordered by domain.
pub fn count_domains(path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let source = CsvRecordReader::default();
    CountDomains::new(&FileReader, &source, AggregationOptions::default())
        .run_path(path.as_ref())
        .map(DomainReport::into_entries)
}

/// Same as [`count_domains`] for an already open byte stream.
pub fn count_domains_from_reader<R: Read>(mut reader: R) -> Result<Vec<Entry>> {
    let source = CsvRecordReader::default();
    // run_reader は opener を参照しない
    CountDomains::new(&FileReader, &source, AggregationOptions::default())
        .run_reader(&mut reader)
        .map(DomainReport::into_entries)
}

/// Runs the pipeline described by `config` and returns the full report.
pub fn run(config: &Config) -> Result<DomainReport> {
    let source = CsvRecordReader::new(config.reader);
    CountDomains::new(&FileReader, &source, config.aggregation.clone()).run_path(&config.input)
}
