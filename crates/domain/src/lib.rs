#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod options;

pub use analytics::{DomainAggregator, DomainSorter, DomainTally};
pub use model::{Entry, Row};
pub use options::AggregationOptions;
