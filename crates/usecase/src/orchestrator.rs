use std::{io::Read, path::Path};

use email_domains_domain::{AggregationOptions, DomainAggregator, DomainSorter};
use email_domains_ports::{RecordSource, StreamOpener};
use email_domains_shared_kernel::{ErrorContext, Result};
use log::{debug, info};

use crate::dto::DomainReport;

/// Reads customer records, tallies their email domains and orders the result.
///
/// Each call runs the three stages to completion in turn: rows are fully read
/// before aggregation starts, and the tally is fully built before sorting.
pub struct CountDomains<'a> {
    opener: &'a dyn StreamOpener,
    source: &'a dyn RecordSource,
    aggregator: DomainAggregator,
}

impl<'a> CountDomains<'a> {
    pub fn new(opener: &'a dyn StreamOpener, source: &'a dyn RecordSource, options: AggregationOptions) -> Self {
        Self { opener, source, aggregator: DomainAggregator::new(options) }
    }

    /// Opens `path` through the stream port, then runs the pipeline on it.
    pub fn run_path(&self, path: &Path) -> Result<DomainReport> {
        let mut stream = self.opener.open(path)?;
        info!("counting email domains in {}", path.display());
        self.run_reader(&mut stream)
    }

    /// Runs the pipeline on an already open byte stream.
    pub fn run_reader(&self, input: &mut dyn Read) -> Result<DomainReport> {
        let rows = self.source.read_rows(input)?;
        let rows_read = rows.len();

        let tally = self
            .aggregator
            .aggregate(&rows)
            .with_context(|| format!("aggregating {rows_read} rows"))?;
        drop(rows);

        let header_rows = tally.header_rows();
        let customers = tally.customers();
        let entries = DomainSorter::sort(tally);
        debug!("sorted {} domains", entries.len());

        Ok(DomainReport { entries, rows_read, header_rows, customers })
    }
}
