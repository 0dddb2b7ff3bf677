// crates/ports/src/records.rs
use std::io::Read;

use email_domains_domain::Row;
use email_domains_shared_kernel::Result;

/// Port for turning a byte stream into the full, ordered list of rows.
///
/// Implementations either return every row or fail; a grammar violation
/// anywhere in the input discards the rows read so far.
pub trait RecordSource {
    fn read_rows(&self, input: &mut dyn Read) -> Result<Vec<Row>>;
}
