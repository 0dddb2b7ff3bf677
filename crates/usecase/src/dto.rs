use email_domains_domain::Entry;
use serde::{Deserialize, Serialize};

/// Output of [`crate::CountDomains`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainReport {
    /// Entries ordered ascending by domain.
    pub entries: Vec<Entry>,
    /// Rows produced by the record source, headers included.
    pub rows_read: usize,
    /// Rows skipped because their email field held the header label.
    pub header_rows: usize,
    /// Customers counted; the sum of all entry counts.
    pub customers: usize,
}

impl DomainReport {
    pub fn distinct_domains(&self) -> usize {
        self.entries.len()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}
