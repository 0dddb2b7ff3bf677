// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod records;

pub use persistence::{FileReader, FileWriter};
pub use records::{CsvRecordReader, ReaderOptions};
