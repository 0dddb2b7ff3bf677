pub mod entry;
pub mod row;

pub use entry::Entry;
pub use row::Row;
