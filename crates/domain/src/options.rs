// crates/domain/src/options.rs

/// Zero-based index of the email column in a customer record.
pub const DEFAULT_EMAIL_COLUMN: usize = 2;

/// Email-column value that marks a header row.
pub const DEFAULT_HEADER_LABEL: &str = "email";

/// Settings for [`crate::DomainAggregator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationOptions {
    pub email_column: usize,
    pub header_label: String,
}

impl AggregationOptions {
    /// Minimum number of fields a row needs to hold the email column.
    #[inline]
    pub fn required_columns(&self) -> usize {
        self.email_column + 1
    }

    pub fn with_email_column(mut self, column: usize) -> Self {
        self.email_column = column;
        self
    }

    pub fn with_header_label(mut self, label: impl Into<String>) -> Self {
        self.header_label = label.into();
        self
    }
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            email_column: DEFAULT_EMAIL_COLUMN,
            header_label: DEFAULT_HEADER_LABEL.to_string(),
        }
    }
}
