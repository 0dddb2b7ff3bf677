use std::collections::{HashMap, hash_map};

use email_domains_shared_kernel::{CustomerCount, DomainError, DomainResult};
use log::{debug, trace};

use crate::{model::Row, options::AggregationOptions};

/// Domain part of an email address: everything after the first `@`.
///
/// `"a@b@c"` yields `"b@c"` and `"a@"` yields the empty domain. Returns `None`
/// when there is no `@` at all.
#[inline]
pub fn extract_domain(email: &str) -> Option<&str> {
    email.split_once('@').map(|(_, domain)| domain)
}

/// Customer counts keyed by domain, in no particular order.
///
/// Use [`crate::DomainSorter`] to obtain a stable ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainTally {
    counts: HashMap<String, CustomerCount>,
    customers: usize,
    header_rows: usize,
}

impl DomainTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one customer for `domain`.
    pub fn record(&mut self, domain: &str) {
        match self.counts.get_mut(domain) {
            Some(count) => count.increment(),
            None => {
                self.counts.insert(domain.to_owned(), CustomerCount::one());
            }
        }
        self.customers += 1;
    }

    fn skip_header(&mut self) {
        self.header_rows += 1;
    }

    pub fn get(&self, domain: &str) -> Option<CustomerCount> {
        self.counts.get(domain).copied()
    }

    /// Number of distinct domains.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of data rows counted; equals the sum of all domain counts.
    pub fn customers(&self) -> usize {
        self.customers
    }

    /// Number of rows skipped because their email field held the header label.
    pub fn header_rows(&self) -> usize {
        self.header_rows
    }
}

impl IntoIterator for DomainTally {
    type Item = (String, CustomerCount);
    type IntoIter = hash_map::IntoIter<String, CustomerCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

/// Validates customer rows and tallies their email domains.
#[derive(Debug, Clone, Default)]
pub struct DomainAggregator {
    options: AggregationOptions,
}

impl DomainAggregator {
    pub fn new(options: AggregationOptions) -> Self {
        Self { options }
    }

    /// Tallies every non-header row in a single pass.
    ///
    /// The first row's width is checked before any domain is looked at. Later
    /// rows are expected to share it; one that does not still fails with
    /// [`DomainError::InvalidColumnCount`] naming its own row. The first email
    /// without an `@` aborts the whole pass.
    pub fn aggregate(&self, rows: &[Row]) -> DomainResult<DomainTally> {
        let first = rows.first().ok_or(DomainError::EmptyInput)?;
        self.email_field(first, 1)?;

        let mut tally = DomainTally::new();
        for (idx, row) in rows.iter().enumerate() {
            let row_no = idx + 1;
            let email = self.email_field(row, row_no)?;

            if email == self.options.header_label {
                trace!("skipping header row {row_no}");
                tally.skip_header();
                continue;
            }

            let domain = extract_domain(email)
                .ok_or_else(|| DomainError::InvalidDomain { row: row_no, email: email.to_owned() })?;
            if domain.is_empty() {
                trace!("row {row_no}: '{email}' has an empty domain");
            }
            tally.record(domain);
        }

        debug!(
            "aggregated {} rows into {} domains ({} header rows skipped)",
            rows.len(),
            tally.len(),
            tally.header_rows()
        );
        Ok(tally)
    }

    fn email_field<'r>(&self, row: &'r Row, row_no: usize) -> DomainResult<&'r str> {
        row.field(self.options.email_column).ok_or(DomainError::InvalidColumnCount {
            row: row_no,
            required: self.options.required_columns(),
            found: row.len(),
        })
    }
}
