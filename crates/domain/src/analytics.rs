pub mod aggregate;
pub mod sort;

pub use aggregate::{DomainAggregator, DomainTally, extract_domain};
pub use sort::DomainSorter;
